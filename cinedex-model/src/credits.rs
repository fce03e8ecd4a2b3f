use std::fmt::{self, Display, Formatter};

use crate::ids::TitleId;

/// Closed set of upstream credit categories.
///
/// Declaration order is the fixed output order of a credit listing; a new
/// upstream category is a compile-time-visible addition here, not a silent
/// new map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CreditCategory {
    Director,
    Writer,
    Actress,
    Actor,
    Producer,
    Composer,
    Cinematographer,
    Editor,
    CastingDirector,
    ProductionDesigner,
    ArtDirector,
    SetDecorator,
    CostumeDesigner,
    MakeUpDepartment,
    ProductionManager,
    AssistantDirector,
    ArtDepartment,
    SoundDepartment,
    SpecialEffects,
    VisualEffects,
    Stunts,
    Choreographer,
    CameraDepartment,
    AnimationDepartment,
    CastingDepartment,
    CostumeDepartment,
    EditorialDepartment,
    ElectricalDepartment,
    LocationManagement,
    MusicDepartment,
    ProductionDepartment,
    ScriptDepartment,
    TransportationDepartment,
    Miscellaneous,
    Thanks,
    Executive,
    Legal,
    Soundtrack,
    Manager,
    Assistant,
    TalentAgent,
    SelfAppearance,
    Publicist,
    MusicArtist,
    Podcaster,
    ArchiveFootage,
    ArchiveSound,
    CostumeSupervisor,
    HairStylist,
    IntimacyCoordinator,
    MakeUpArtist,
    MusicSupervisor,
    PropertyMaster,
    ScriptSupervisor,
    Showrunner,
    StuntCoordinator,
    Accountant,
}

impl CreditCategory {
    /// Every category, in output order.
    pub const ALL: [CreditCategory; 57] = [
        CreditCategory::Director,
        CreditCategory::Writer,
        CreditCategory::Actress,
        CreditCategory::Actor,
        CreditCategory::Producer,
        CreditCategory::Composer,
        CreditCategory::Cinematographer,
        CreditCategory::Editor,
        CreditCategory::CastingDirector,
        CreditCategory::ProductionDesigner,
        CreditCategory::ArtDirector,
        CreditCategory::SetDecorator,
        CreditCategory::CostumeDesigner,
        CreditCategory::MakeUpDepartment,
        CreditCategory::ProductionManager,
        CreditCategory::AssistantDirector,
        CreditCategory::ArtDepartment,
        CreditCategory::SoundDepartment,
        CreditCategory::SpecialEffects,
        CreditCategory::VisualEffects,
        CreditCategory::Stunts,
        CreditCategory::Choreographer,
        CreditCategory::CameraDepartment,
        CreditCategory::AnimationDepartment,
        CreditCategory::CastingDepartment,
        CreditCategory::CostumeDepartment,
        CreditCategory::EditorialDepartment,
        CreditCategory::ElectricalDepartment,
        CreditCategory::LocationManagement,
        CreditCategory::MusicDepartment,
        CreditCategory::ProductionDepartment,
        CreditCategory::ScriptDepartment,
        CreditCategory::TransportationDepartment,
        CreditCategory::Miscellaneous,
        CreditCategory::Thanks,
        CreditCategory::Executive,
        CreditCategory::Legal,
        CreditCategory::Soundtrack,
        CreditCategory::Manager,
        CreditCategory::Assistant,
        CreditCategory::TalentAgent,
        CreditCategory::SelfAppearance,
        CreditCategory::Publicist,
        CreditCategory::MusicArtist,
        CreditCategory::Podcaster,
        CreditCategory::ArchiveFootage,
        CreditCategory::ArchiveSound,
        CreditCategory::CostumeSupervisor,
        CreditCategory::HairStylist,
        CreditCategory::IntimacyCoordinator,
        CreditCategory::MakeUpArtist,
        CreditCategory::MusicSupervisor,
        CreditCategory::PropertyMaster,
        CreditCategory::ScriptSupervisor,
        CreditCategory::Showrunner,
        CreditCategory::StuntCoordinator,
        CreditCategory::Accountant,
    ];

    /// Upstream category id, also the stable output key.
    pub fn upstream_id(&self) -> &'static str {
        match self {
            CreditCategory::Director => "director",
            CreditCategory::Writer => "writer",
            CreditCategory::Actress => "actress",
            CreditCategory::Actor => "actor",
            CreditCategory::Producer => "producer",
            CreditCategory::Composer => "composer",
            CreditCategory::Cinematographer => "cinematographer",
            CreditCategory::Editor => "editor",
            CreditCategory::CastingDirector => "casting_director",
            CreditCategory::ProductionDesigner => "production_designer",
            CreditCategory::ArtDirector => "art_director",
            CreditCategory::SetDecorator => "set_decorator",
            CreditCategory::CostumeDesigner => "costume_designer",
            CreditCategory::MakeUpDepartment => "make_up_department",
            CreditCategory::ProductionManager => "production_manager",
            CreditCategory::AssistantDirector => "assistant_director",
            CreditCategory::ArtDepartment => "art_department",
            CreditCategory::SoundDepartment => "sound_department",
            CreditCategory::SpecialEffects => "special_effects",
            CreditCategory::VisualEffects => "visual_effects",
            CreditCategory::Stunts => "stunts",
            CreditCategory::Choreographer => "choreographer",
            CreditCategory::CameraDepartment => "camera_department",
            CreditCategory::AnimationDepartment => "animation_department",
            CreditCategory::CastingDepartment => "casting_department",
            CreditCategory::CostumeDepartment => "costume_department",
            CreditCategory::EditorialDepartment => "editorial_department",
            CreditCategory::ElectricalDepartment => "electrical_department",
            CreditCategory::LocationManagement => "location_management",
            CreditCategory::MusicDepartment => "music_department",
            CreditCategory::ProductionDepartment => "production_department",
            CreditCategory::ScriptDepartment => "script_department",
            CreditCategory::TransportationDepartment => {
                "transportation_department"
            }
            CreditCategory::Miscellaneous => "miscellaneous",
            CreditCategory::Thanks => "thanks",
            CreditCategory::Executive => "executive",
            CreditCategory::Legal => "legal",
            CreditCategory::Soundtrack => "soundtrack",
            CreditCategory::Manager => "manager",
            CreditCategory::Assistant => "assistant",
            CreditCategory::TalentAgent => "talent_agent",
            CreditCategory::SelfAppearance => "self",
            CreditCategory::Publicist => "publicist",
            CreditCategory::MusicArtist => "music_artist",
            CreditCategory::Podcaster => "podcaster",
            CreditCategory::ArchiveFootage => "archive_footage",
            CreditCategory::ArchiveSound => "archive_sound",
            CreditCategory::CostumeSupervisor => "costume_supervisor",
            CreditCategory::HairStylist => "hair_stylist",
            CreditCategory::IntimacyCoordinator => "intimacy_coordinator",
            CreditCategory::MakeUpArtist => "make_up_artist",
            CreditCategory::MusicSupervisor => "music_supervisor",
            CreditCategory::PropertyMaster => "property_master",
            CreditCategory::ScriptSupervisor => "script_supervisor",
            CreditCategory::Showrunner => "showrunner",
            CreditCategory::StuntCoordinator => "stunt_coordinator",
            CreditCategory::Accountant => "accountant",
        }
    }

    pub fn from_upstream_id(raw: &str) -> Option<Self> {
        CreditCategory::ALL
            .iter()
            .copied()
            .find(|category| category.upstream_id() == raw)
    }
}

impl Display for CreditCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.upstream_id())
    }
}

/// One filmography line.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreditEntry {
    pub title_id: Option<TitleId>,
    pub title: String,
    pub title_type: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub characters: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub jobs: Vec<String>,
}

/// Complete filmography, bucketed by category.
///
/// Every category bucket exists from construction, so consumers can index
/// any category without probing first; categories the person never worked
/// in simply stay empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreditList {
    buckets: Vec<CreditBucket>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreditBucket {
    pub category: CreditCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub entries: Vec<CreditEntry>,
}

impl CreditList {
    pub fn new() -> Self {
        CreditList {
            buckets: CreditCategory::ALL
                .iter()
                .map(|&category| CreditBucket {
                    category,
                    entries: Vec::new(),
                })
                .collect(),
        }
    }

    pub fn push(&mut self, category: CreditCategory, entry: CreditEntry) {
        self.buckets[category as usize].entries.push(entry);
    }

    pub fn get(&self, category: CreditCategory) -> &[CreditEntry] {
        &self.buckets[category as usize].entries
    }

    /// Buckets in fixed category order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = &CreditBucket> {
        self.buckets.iter()
    }

    pub fn total_entries(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.entries.len()).sum()
    }
}

impl Default for CreditList {
    fn default() -> Self {
        Self::new()
    }
}

/// "Known for" strip entry.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnownForEntry {
    pub title_id: Option<TitleId>,
    pub title: String,
    pub year: Option<i32>,
    pub end_year: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub characters: Vec<String>,
}
