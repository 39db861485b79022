use serde::{Deserialize, Serialize};

/// The résumé data document. Each section is optional: a missing or `null`
/// section skips that section's render and nothing else.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResumeDocument {
    #[serde(default)]
    pub about: Option<AboutInfo>,
    #[serde(default)]
    pub experience: Option<Vec<ExperienceEntry>>,
    #[serde(default)]
    pub skills: Option<SkillsInfo>,
    #[serde(default)]
    pub interests: Option<InterestsInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutInfo {
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub social_links: Vec<SocialLink>,
}

impl AboutInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    /// Icon class tokens, e.g. `fab fa-github`.
    pub icon: String,
}

/// Dates are display strings; entries keep the order the author gave them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkillsInfo {
    pub languages: Vec<LanguageSkill>,
    pub tools: Vec<ToolSkill>,
    pub workflow: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LanguageSkill {
    pub name: String,
    pub skills: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolSkill {
    pub name: String,
    pub url: String,
    pub icon: String,
    /// `"iconify"` or `"font"`; any other value renders as a font glyph.
    pub icon_type: String,
}

impl ToolSkill {
    pub fn is_iconify(&self) -> bool {
        self.icon_type == "iconify"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InterestsInfo {
    pub summary: String,
    pub details: String,
    pub hobbies: String,
}
