use core::fmt;
use core::str::FromStr;

use pokerchat_core::{IconFormat, IconId};
use serde::{Deserialize, Serialize};

const DEFAULT_EMOJI_NAME: &str = "c";

/// How an icon id is written into a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IconStyle {
    /// The id itself; suits manifests whose ids are already displayable.
    #[default]
    Plain,
    /// Custom emoji mention, `<:name:id>`.
    Mention {
        #[serde(default = "default_emoji_name")]
        name: String,
    },
}

impl IconStyle {
    pub fn mention() -> Self {
        IconStyle::Mention {
            name: default_emoji_name(),
        }
    }
}

impl IconFormat for IconStyle {
    fn display(&self, icon: &IconId) -> String {
        match self {
            IconStyle::Plain => icon.as_str().to_string(),
            IconStyle::Mention { name } => format!("<:{name}:{icon}>"),
        }
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconStyle::Plain => f.write_str("plain"),
            IconStyle::Mention { name } => write!(f, "mention:{name}"),
        }
    }
}

impl FromStr for IconStyle {
    type Err = String;

    /// `plain`, `mention`, or `mention:<name>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            None if s.eq_ignore_ascii_case("plain") => Ok(IconStyle::Plain),
            None if s.eq_ignore_ascii_case("mention") => Ok(IconStyle::mention()),
            Some((kind, name)) if kind.eq_ignore_ascii_case("mention") && !name.is_empty() => {
                Ok(IconStyle::Mention {
                    name: name.to_string(),
                })
            }
            _ => Err(format!(
                "unknown icon style `{s}` (expected plain, mention or mention:<name>)"
            )),
        }
    }
}

fn default_emoji_name() -> String {
    DEFAULT_EMOJI_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::IconStyle;
    use pokerchat_core::{IconFormat, IconId};

    #[test]
    fn mention_wraps_id_in_emoji_syntax() {
        let icon = IconId::new("1093017412389");
        assert_eq!(IconStyle::mention().display(&icon), "<:c:1093017412389>");
        assert_eq!(IconStyle::Plain.display(&icon), "1093017412389");
    }

    #[test]
    fn parses_cli_spellings() {
        assert_eq!("plain".parse::<IconStyle>().unwrap(), IconStyle::Plain);
        assert_eq!("Mention".parse::<IconStyle>().unwrap(), IconStyle::mention());
        assert_eq!(
            "mention:card".parse::<IconStyle>().unwrap(),
            IconStyle::Mention {
                name: "card".to_string()
            }
        );
        assert!("mention:".parse::<IconStyle>().is_err());
        assert!("bold".parse::<IconStyle>().is_err());
    }

    #[test]
    fn display_parses_back() {
        let style = IconStyle::Mention {
            name: "x".to_string(),
        };
        assert_eq!(style.to_string().parse::<IconStyle>().unwrap(), style);
    }

    #[test]
    fn deserializes_tagged_form_with_default_name() {
        let style: IconStyle = serde_json::from_str(r#"{"kind":"mention"}"#).unwrap();
        assert_eq!(style, IconStyle::mention());
    }
}
