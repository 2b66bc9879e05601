//! Execution boundary: checking and running compiled queries against PostgreSQL.
crate::reexport!(validator);
crate::reexport!(search);
crate::reexport!(store_tests, test);
