//! DSL dictionary markup.

use crate::model::transcription::TranscriptionMap;

/// File extension of rendered dictionaries.
pub const EXTENSION: &str = "dsl";

/// Renders one dictionary. Words and transcriptions are emitted verbatim.
pub fn render(code: &str, name: &str, description: &str, ipa: &TranscriptionMap) -> String {
    let mut out = String::new();

    out.push_str(&format!("#NAME \"IPA Dictionary - {code}: {description}\"\n"));
    out.push_str(&format!("#INDEX_LANGUAGE \"{name}\"\n"));
    out.push_str(&format!("#CONTENTS_LANGUAGE \"{name}\"\n\n"));

    for (word, transcription) in ipa.iter() {
        out.push_str(&format!("{word}\n\t[m1]{transcription}[/m]\n\n"));
    }

    out
}

/// `fr_ipa.dsl`
pub fn file_name(code: &str) -> String {
    format!("{code}_ipa.{EXTENSION}")
}
