//! Compiler from paper query sentences to parameterised SQL.
//!
//! `compile` runs the three stages in order: `tokenize` splits the sentence,
//! `parse` walks the tokens once into a `PaperQuery`, and `assemble` renders
//! it through a `Clauses` accumulator. Entity names are never written into
//! the SQL; they come back as bound parameters.
crate::reexport!(ast);
crate::reexport!(assembler);
crate::reexport!(clauses);
crate::reexport!(compile_error);
crate::reexport!(cursor);
crate::reexport!(parser);
crate::reexport!(request);
crate::reexport!(compile_tests, test);

use crate::grammar::tokenizer::tokenize;

/// Compile with PostgreSQL placeholders (`$1`, `$2`, …).
pub fn compile(query: &str) -> std::result::Result<CompiledQuery, CompileError> {
    compile_with(query, Placeholder::Dollar)
}

pub fn compile_with(
    query: &str,
    placeholder: Placeholder,
) -> std::result::Result<CompiledQuery, CompileError> {
    let tokens = tokenize(query);
    let parsed = parse(&tokens).inspect_err(|e| crate::debug!("Rejected {query:?}: {e}"))?;
    let compiled = assemble(&parsed, placeholder);
    crate::trace!("Compiled {query:?} into {compiled}");
    Ok(compiled)
}
