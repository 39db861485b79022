pub mod resume;

pub use resume::{
    AboutInfo, ExperienceEntry, InterestsInfo, LanguageSkill, ResumeDocument, SkillsInfo,
    SocialLink, ToolSkill,
};
