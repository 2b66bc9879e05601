use itertools::Itertools as _;

/// Bind-parameter syntax of the target database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placeholder {
    /// `$1`, `$2`, … (PostgreSQL).
    #[default]
    Dollar,
    /// `?` (SQLite).
    Question,
}

impl Placeholder {
    /// Placeholder text for the parameter at 1-based `ordinal`.
    pub fn render(self, ordinal: usize) -> String {
        match self {
            Placeholder::Dollar => format!("${ordinal}"),
            Placeholder::Question => "?".to_string(),
        }
    }
}

/// Fragments collected while assembling a query, rendered in insertion order.
///
/// User text never enters the fragments: `bind` stores it as a parameter and
/// hands back the placeholder to splice in instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clauses {
    pub select: Vec<String>,
    pub from: Vec<String>,
    pub r#where: Vec<String>,
    pub limit: Vec<String>,
    params: Vec<String>,
    placeholder: Placeholder,
}

impl Clauses {
    pub fn new(placeholder: Placeholder) -> Self {
        Self {
            placeholder,
            ..Default::default()
        }
    }

    /// Record `value` as the next bound parameter and return its placeholder.
    pub fn bind(&mut self, value: impl Into<String>) -> String {
        self.params.push(value.into());
        self.placeholder.render(self.params.len())
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn into_params(self) -> Vec<String> {
        self.params
    }

    /// `SELECT <select> FROM <from> [WHERE <where>] [<limit>]`, each section space-joined.
    /// `WHERE` is only written when there are conditions.
    pub fn render(&self) -> String {
        let mut sql = format!(
            "SELECT {} FROM {}",
            self.select.iter().join(" "),
            self.from.iter().join(" ")
        );
        if !self.r#where.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.r#where.iter().join(" "));
        }
        if !self.limit.is_empty() {
            sql.push(' ');
            sql.push_str(&self.limit.iter().join(" "));
        }
        sql
    }
}
