use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 作品集文件的根結構，所有欄位皆為選填
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioDocument {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub theme_colors: Option<ThemeColors>,
    pub section_order: Option<Vec<String>>,
    pub about_text: Option<String>,
    pub skills: Option<SkillsData>,
    pub skills_display_mode: Option<String>,
    pub projects: Vec<Project>,
    pub timeline: Vec<TimelineEntry>,
    pub contact: Option<ContactInfo>,
    pub links: Option<Links>,
    pub resume_url: Option<String>,
    pub references_url: Option<String>,
    pub references: Vec<Reference>,
    pub footer_descriptors: Vec<String>,
    pub projects_description: Option<String>,
    pub contact_intro: Option<String>,
    pub headshot_image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsData {
    pub categories: Vec<SkillCategory>,
    pub skills: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub id: String,
    pub name: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub image_bg: Option<String>,
    pub image_style: Option<String>,
    pub skills: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub year: Option<String>,
    pub title: Option<String>,
    pub organization: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub phone: Option<String>,
    pub areas_of_interest: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Reference {
    pub name: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub relationship: Option<String>,
    pub description: Option<String>,
    pub testimonial: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
}

/// 主頁可用的區塊
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Timeline,
    Contact,
}

impl SectionId {
    pub const DEFAULT_ORDER: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Timeline,
        SectionId::Contact,
    ];

    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "hero" => Some(SectionId::Hero),
            "about" => Some(SectionId::About),
            "skills" => Some(SectionId::Skills),
            "projects" => Some(SectionId::Projects),
            "timeline" => Some(SectionId::Timeline),
            "contact" => Some(SectionId::Contact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Timeline => "timeline",
            SectionId::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillsDisplayMode {
    #[default]
    Card,
    Rotating,
}

/// 時間軸項目類型，順序即標題中的偏好順序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimelineKind {
    Education,
    Experience,
    Research,
}

impl TimelineKind {
    pub const PREFERRED_ORDER: [TimelineKind; 3] = [
        TimelineKind::Education,
        TimelineKind::Experience,
        TimelineKind::Research,
    ];

    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "education" => Some(TimelineKind::Education),
            "experience" => Some(TimelineKind::Experience),
            "research" => Some(TimelineKind::Research),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimelineKind::Education => "Education",
            TimelineKind::Experience => "Experience",
            TimelineKind::Research => "Research",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageBackground {
    White,
    Black,
    Gray,
}

/// 單一輸出頁面
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub file_name: String,
    pub html: String,
}

#[derive(Debug, Clone, Default)]
pub struct RenderedSite {
    pub pages: Vec<RenderedPage>,
}

impl RenderedSite {
    pub fn page(&self, file_name: &str) -> Option<&RenderedPage> {
        self.pages.iter().find(|page| page.file_name == file_name)
    }
}

impl PortfolioDocument {
    /// 主頁區塊順序；未提供時使用預設順序
    pub fn section_order(&self) -> Vec<String> {
        match &self.section_order {
            Some(order) => order.clone(),
            None => SectionId::DEFAULT_ORDER
                .iter()
                .map(|id| id.as_str().to_string())
                .collect(),
        }
    }

    /// Whether `id` appears in the effective section order.
    pub fn shows_section(&self, id: SectionId) -> bool {
        self.section_order()
            .iter()
            .any(|entry| SectionId::parse(entry) == Some(id))
    }

    pub fn skills_display_mode(&self) -> SkillsDisplayMode {
        match self.skills_display_mode.as_deref() {
            Some("rotating") => SkillsDisplayMode::Rotating,
            _ => SkillsDisplayMode::Card,
        }
    }

    pub fn has_references_page(&self) -> bool {
        let has_url = self
            .references_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty());
        has_url || !self.references.is_empty()
    }

    pub fn has_projects_page(&self) -> bool {
        !self.projects.is_empty()
    }
}

impl SkillsData {
    /// 至少有一項技能的分類，保留原順序
    pub fn populated_categories(&self) -> Vec<(&SkillCategory, &[String])> {
        self.categories
            .iter()
            .filter_map(|category| {
                self.skills
                    .get(&category.id)
                    .filter(|skills| !skills.is_empty())
                    .map(|skills| (category, skills.as_slice()))
            })
            .collect()
    }
}

impl Project {
    pub fn summary_text(&self) -> Option<&str> {
        self.summary
            .as_deref()
            .filter(|summary| !summary.trim().is_empty())
            .or(self.description.as_deref())
    }

    pub fn image_background(&self) -> ImageBackground {
        match self.image_bg.as_deref() {
            Some("white") => ImageBackground::White,
            Some("black") => ImageBackground::Black,
            _ => ImageBackground::Gray,
        }
    }

    pub fn object_fit_class(&self) -> &'static str {
        match self.image_style.as_deref() {
            Some("contain") => "object-contain",
            Some("fill") => "object-fill",
            Some("scale-down") => "object-scale-down",
            Some("none") => "object-none",
            _ => "object-cover",
        }
    }
}

impl TimelineEntry {
    pub fn kind(&self) -> Option<TimelineKind> {
        self.kind.as_deref().and_then(TimelineKind::parse)
    }
}

impl Reference {
    pub fn testimonial_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|description| !description.trim().is_empty())
            .or(self.testimonial.as_deref())
    }
}
