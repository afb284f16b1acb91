//! Short canonical tokens for regions and stages.
//!
//! Region names arrive in several spellings (`West US`, `westus`,
//! `west-us`); all of them collapse to the same code (`wus`). Anything that
//! contains no recognised word is returned unchanged.

/// Geographic words and their abbreviations.
///
/// Longer words that share a prefix with shorter ones are listed first so the
/// scan picks the longest match.
const REGION_WORDS: &[(&str, &str)] = &[
    ("northeast", "ne"),
    ("northwest", "nw"),
    ("southeast", "se"),
    ("southwest", "sw"),
    ("north", "n"),
    ("south", "s"),
    ("east", "e"),
    ("west", "w"),
    ("central", "c"),
    ("europe", "eu"),
    ("asia", "as"),
    ("australia", "au"),
    ("japan", "jp"),
    ("brazil", "br"),
    ("canada", "ca"),
    ("india", "in"),
    ("korea", "kr"),
    ("france", "fr"),
    ("germany", "de"),
    ("norway", "no"),
    ("switzerland", "ch"),
    ("africa", "af"),
];

const STAGE_WORDS: &[(&str, &str)] = &[
    ("production", "prod"),
    ("development", "dev"),
    ("testing", "test"),
    ("dogfood", "df"),
    ("staging", "stg"),
];

/// Encode a region name into its short form.
pub fn short_region(region: &str) -> String {
    let normalized: String = region
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect();

    let mut out = String::with_capacity(normalized.len());
    let mut matched = false;
    let mut rest = normalized.as_str();

    while let Some(c) = rest.chars().next() {
        match REGION_WORDS.iter().find(|(word, _)| rest.starts_with(word)) {
            Some((word, abbr)) => {
                out.push_str(abbr);
                rest = &rest[word.len()..];
                matched = true;
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    if matched {
        out
    } else {
        region.to_string()
    }
}

/// Encode a stage name into its short form.
pub fn short_stage(stage: &str) -> String {
    let lowered = stage.to_lowercase();
    let mut out = lowered.clone();
    for (word, abbr) in STAGE_WORDS {
        out = out.replace(word, abbr);
    }

    if out == lowered {
        stage.to_string()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_spellings_collapse_to_one_code() {
        assert_eq!(short_region("West US"), "wus");
        assert_eq!(short_region("westus"), "wus");
        assert_eq!(short_region("west-us"), "wus");
    }

    #[test]
    fn region_keeps_trailing_digits() {
        assert_eq!(short_region("westus2"), "wus2");
        assert_eq!(short_region("East US 2"), "eus2");
    }

    #[test]
    fn region_compound_words() {
        assert_eq!(short_region("southeastasia"), "seas");
        assert_eq!(short_region("North Europe"), "neu");
        assert_eq!(short_region("West Europe"), "weu");
        assert_eq!(short_region("centralus"), "cus");
        assert_eq!(short_region("uksouth"), "uks");
    }

    #[test]
    fn unknown_region_passes_through() {
        assert_eq!(short_region("Mars"), "Mars");
        assert_eq!(short_region(""), "");
    }

    #[test]
    fn stage_known_words() {
        assert_eq!(short_stage("production"), "prod");
        assert_eq!(short_stage("Development"), "dev");
        assert_eq!(short_stage("testing"), "test");
        assert_eq!(short_stage("dogfood"), "df");
    }

    #[test]
    fn stage_unknown_passes_through() {
        assert_eq!(short_stage("dev"), "dev");
        assert_eq!(short_stage("QA"), "QA");
    }
}
