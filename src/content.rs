use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PROFILE_FILE: &str = "profile.json";

static PROFILE: LazyLock<Result<Profile, ContentError>> = LazyLock::new(|| load(PROFILE_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("couldn't parse profile content: {0}")]
    Parse(String),
    #[error("portfolio needs at least one image")]
    EmptyPortfolio,
    #[error("proficiency for {label} is {pct}%, above 100%")]
    Proficiency { label: String, pct: u8 },
    #[error("feedback from {from} is rated {rating}, above the maximum of {max}")]
    Rating { from: String, rating: u8, max: u8 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub company: String,
    #[serde(default)]
    pub company_logo: Option<Logo>,
    pub location: String,
    pub avatar: String,
    #[serde(default)]
    pub banner_image: Option<String>,
    pub skills: Vec<String>,
    pub socials: Vec<Social>,
    pub portfolio_links: Vec<PortfolioLink>,
    pub verifications: Vec<Verification>,
    pub proficiency: Vec<Proficiency>,
    pub about: About,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub feedback: Vec<Feedback>,
    pub portfolio: Vec<String>,
    pub stats: Stats,
    pub earnings: Earnings,
    pub ctas: Ctas,
    pub nav: NavConfig,
    pub footer: FooterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    X,
    LinkedIn,
    Dribbble,
    GitHub,
}

/// Company mark: the built-in Google glyph or a short text/emoji badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Logo {
    Google,
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Social {
    pub name: String,
    pub color: String,
    pub icon: SocialIcon,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioLink {
    pub label: String,
    pub abbr: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verification {
    pub label: String,
    pub ok: bool,
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proficiency {
    pub label: String,
    pub pct: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub summary: String,
    pub bullets: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub when: String,
    pub logo: Logo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub from: String,
    pub rating: u8,
    pub date: NaiveDate,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    pub rating: f64,
    pub rating_max: u8,
    pub bookmarks: u64,
    pub jobs: u32,
    pub trend: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Earnings {
    pub label: String,
    pub amount: String,
    pub basis: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ctas {
    pub primary: Link,
    pub secondary: Link,
}

/// Small-viewport navigation style. Both render the same links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavVariant {
    /// Panel that expands under the bar.
    Dropdown,
    /// Side drawer over a dimmed backdrop.
    #[default]
    Drawer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    pub brand: String,
    #[serde(default)]
    pub variant: NavVariant,
    pub links: Vec<Link>,
    pub sign_up: Link,
    pub log_in: Link,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterConfig {
    pub brand: String,
    pub blurb: String,
    pub socials: Vec<Social>,
    pub columns: Vec<FooterColumn>,
    pub legal: Vec<Link>,
}

impl Profile {
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.portfolio.is_empty() {
            return Err(ContentError::EmptyPortfolio);
        }
        if let Some(p) = self.proficiency.iter().find(|p| p.pct > 100) {
            return Err(ContentError::Proficiency {
                label: p.label.clone(),
                pct: p.pct,
            });
        }
        let max = self.stats.rating_max;
        if let Some(f) = self.feedback.iter().find(|f| f.rating > max) {
            return Err(ContentError::Rating {
                from: f.from.clone(),
                rating: f.rating,
                max,
            });
        }
        Ok(())
    }
}

/// The embedded site profile, parsed on first use.
pub fn profile() -> Result<&'static Profile, ContentError> {
    PROFILE.as_ref().map_err(Clone::clone)
}

pub fn parse(bytes: &[u8]) -> Result<Profile, ContentError> {
    let profile: Profile =
        serde_json::from_slice(bytes).map_err(|e| ContentError::Parse(e.to_string()))?;
    profile.validate()?;
    Ok(profile)
}

fn load(name: &str) -> Result<Profile, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
    let res = parse(&file.data);
    match &res {
        Ok(p) => log::debug!(
            "loaded profile for {} with {} portfolio images",
            p.name,
            p.portfolio.len()
        ),
        Err(e) => log::error!("{e}"),
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn embedded_json() -> Value {
        let file = Assets::get(PROFILE_FILE).expect("profile should be embedded");
        serde_json::from_slice(&file.data).expect("profile should be valid json")
    }

    fn parse_value(value: &Value) -> Result<Profile, ContentError> {
        parse(&serde_json::to_vec(value).unwrap())
    }

    #[test]
    fn test_embedded_profile_loads() {
        let profile = profile().expect("embedded profile should be valid");
        assert_eq!(profile.name, "David Smith");
        assert_eq!(profile.portfolio.len(), 12);
        assert_eq!(profile.skills.len(), 6);
        assert_eq!(profile.nav.variant, NavVariant::Drawer);
        assert_eq!(profile.footer.columns.len(), 3);
        assert!(profile.banner_image.is_none());
    }

    #[test]
    fn test_feedback_dates_parse() {
        let profile = profile().unwrap();
        let first = &profile.feedback[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 11, 12).unwrap());
        assert_eq!(first.rating, 5);
    }

    #[test]
    fn test_verification_action_is_optional() {
        let profile = profile().unwrap();
        let with_action = profile
            .verifications
            .iter()
            .filter(|v| v.action.is_some())
            .collect::<Vec<_>>();
        assert_eq!(with_action.len(), 1);
        assert!(!with_action[0].ok);
    }

    #[test]
    fn test_empty_portfolio_rejected() {
        let mut value = embedded_json();
        value["portfolio"] = json!([]);
        assert_eq!(parse_value(&value).unwrap_err(), ContentError::EmptyPortfolio);
    }

    #[test]
    fn test_proficiency_over_100_rejected() {
        let mut value = embedded_json();
        value["proficiency"][2]["pct"] = json!(120);
        let err = parse_value(&value).unwrap_err();
        assert_eq!(
            err,
            ContentError::Proficiency {
                label: "UI Design".to_string(),
                pct: 120
            }
        );
    }

    #[test]
    fn test_rating_over_max_rejected() {
        let mut value = embedded_json();
        value["feedback"][1]["rating"] = json!(7);
        assert!(matches!(
            parse_value(&value),
            Err(ContentError::Rating { rating: 7, max: 5, .. })
        ));
    }

    #[test]
    fn test_nav_variant_defaults_to_drawer() {
        let mut value = embedded_json();
        value["nav"]
            .as_object_mut()
            .unwrap()
            .remove("variant");
        let profile = parse_value(&value).unwrap();
        assert_eq!(profile.nav.variant, NavVariant::Drawer);

        value["nav"]["variant"] = json!("dropdown");
        let profile = parse_value(&value).unwrap();
        assert_eq!(profile.nav.variant, NavVariant::Dropdown);
    }

    #[test]
    fn test_logos_are_typed() {
        let profile = profile().unwrap();
        assert_eq!(profile.company_logo, Some(Logo::Google));
        assert_eq!(profile.experience[0].logo, Logo::Google);
        assert_eq!(profile.experience[1].logo, Logo::Text("🧩".to_string()));
    }

    #[test]
    fn test_company_logo_is_optional() {
        let mut value = embedded_json();
        value.as_object_mut().unwrap().remove("company_logo");
        let profile = parse_value(&value).unwrap();
        assert_eq!(profile.company_logo, None);

        value["experience"][0]["logo"] = json!("G");
        assert!(matches!(parse_value(&value), Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(parse(b"{ not json"), Err(ContentError::Parse(_))));
    }
}
