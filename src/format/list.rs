use super::{EXAMPLE_BULLET, FormatError};
use crate::krdict::types::{Definition, DefinitionEntry, ExampleEntry, SearchResponse, WordEntry};

/// A search result the list renderer can summarize.
///
/// Definition searches carry one definition per entry while every other
/// search carries a list; each entry type says where its first one lives.
pub trait ListEntry {
    fn word(&self) -> &str;
    fn origin(&self) -> Option<&str>;
    fn first_definition(&self) -> Result<&Definition, FormatError>;
}

impl ListEntry for WordEntry {
    fn word(&self) -> &str {
        &self.word
    }

    fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    fn first_definition(&self) -> Result<&Definition, FormatError> {
        self.definitions
            .first()
            .ok_or(FormatError::MissingField("definitions[0]"))
    }
}

impl ListEntry for DefinitionEntry {
    fn word(&self) -> &str {
        &self.word
    }

    fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    fn first_definition(&self) -> Result<&Definition, FormatError> {
        Ok(&self.definition_info)
    }
}

fn push_summary<T>(page: &SearchResponse<T>, out: &mut String) {
    out.push_str(&format!("Total Results: {}\n", page.total_results));
}

/// Summary line, then `N. word (origin): definition` per result followed by
/// every translation of that definition.
pub fn render_list<E: ListEntry>(
    page: &SearchResponse<E>,
    out: &mut String,
) -> Result<(), FormatError> {
    push_summary(page, out);

    for (idx, entry) in page.results.iter().enumerate() {
        let dfn = entry.first_definition()?;
        let origin = entry
            .origin()
            .filter(|o| !o.is_empty())
            .map(|o| format!(" ({o})"))
            .unwrap_or_default();
        out.push_str(&format!(
            "{}. {}{origin}: {}\n",
            idx + 1,
            entry.word(),
            dfn.definition
        ));

        for translation in &dfn.translations {
            match translation.word.as_deref() {
                Some(word) => {
                    out.push_str(&format!("   {word}: {}\n", translation.definition))
                }
                None => out.push_str(&format!("   {}\n", translation.definition)),
            }
        }
    }
    Ok(())
}

pub fn render_examples(
    page: &SearchResponse<ExampleEntry>,
    out: &mut String,
) -> Result<(), FormatError> {
    push_summary(page, out);
    for entry in &page.results {
        out.push_str(&format!(
            "{EXAMPLE_BULLET} {} (Word: {})\n",
            entry.example, entry.word
        ));
    }
    Ok(())
}
