use serde::Serialize;

/// How well a promotional tool reaches an audience group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Affinity {
    #[serde(rename = "")]
    Absent,
    Partly,
    Largely,
}

impl Affinity {
    pub fn score(self) -> u8 {
        match self {
            Affinity::Largely => 3,
            Affinity::Partly => 1,
            Affinity::Absent => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Affinity::Absent => "N/A",
            Affinity::Partly => "Partly",
            Affinity::Largely => "Largely",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolCategory {
    Advertising,
    Digital,
    SalesPromotion,
    Print,
    Events,
    Relationship,
    Direct,
    Pr,
}

impl ToolCategory {
    pub fn key(self) -> &'static str {
        match self {
            ToolCategory::Advertising => "advertising",
            ToolCategory::Digital => "digital",
            ToolCategory::SalesPromotion => "sales-promotion",
            ToolCategory::Print => "print",
            ToolCategory::Events => "events",
            ToolCategory::Relationship => "relationship",
            ToolCategory::Direct => "direct",
            ToolCategory::Pr => "pr",
        }
    }

    /// Key with hyphens as spaces and each word capitalised ("Sales Promotion").
    pub fn label(self) -> String {
        self.key()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DesignResource {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommunicationTool {
    pub name: &'static str,
    pub partner: Affinity,
    pub customer: Affinity,
    pub category: ToolCategory,
    pub resources: &'static [DesignResource],
}

const fn canva(url: &'static str, description: &'static str) -> DesignResource {
    DesignResource {
        name: "Canva",
        url,
        icon: "🎨",
        description,
    }
}

pub static COMMUNICATION_TOOLS: [CommunicationTool; 14] = [
    CommunicationTool {
        name: "Advertisements on TV/Newspaper/Magazines/Radio",
        partner: Affinity::Partly,
        customer: Affinity::Largely,
        category: ToolCategory::Advertising,
        resources: &[],
    },
    CommunicationTool {
        name: "Social Media Advertising (Facebook/Instagram/LinkedIn)",
        partner: Affinity::Partly,
        customer: Affinity::Largely,
        category: ToolCategory::Digital,
        resources: &[
            canva("https://www.canva.com/create/facebook-ads/", "Facebook Ad Templates"),
            canva("https://www.canva.com/create/instagram-posts/", "Instagram Post Templates"),
            DesignResource {
                name: "Meta Ads Manager",
                url: "https://business.facebook.com/adsmanager",
                icon: "📱",
                description: "Create & Manage Ads",
            },
        ],
    },
    CommunicationTool {
        name: "Point of Purchase Promotions in Retail Outlets",
        partner: Affinity::Absent,
        customer: Affinity::Largely,
        category: ToolCategory::SalesPromotion,
        resources: &[
            canva("https://www.canva.com/create/posters/", "POS Poster Templates"),
            canva("https://www.canva.com/create/shelf-talkers/", "Shelf Talker Designs"),
        ],
    },
    CommunicationTool {
        name: "Display Boards / Billboards",
        partner: Affinity::Partly,
        customer: Affinity::Largely,
        category: ToolCategory::Advertising,
        resources: &[
            canva("https://www.canva.com/create/billboards/", "Billboard Templates"),
            DesignResource {
                name: "Visme",
                url: "https://www.visme.co/",
                icon: "📊",
                description: "Visual Design Tool",
            },
        ],
    },
    CommunicationTool {
        name: "Pamphlets/Brochures/Flyers",
        partner: Affinity::Partly,
        customer: Affinity::Largely,
        category: ToolCategory::Print,
        resources: &[
            canva("https://www.canva.com/create/brochures/", "Brochure Templates"),
            canva("https://www.canva.com/create/flyers/", "Flyer Templates"),
            DesignResource {
                name: "Visme",
                url: "https://www.visme.co/brochure-maker/",
                icon: "📊",
                description: "Brochure Maker",
            },
            DesignResource {
                name: "Lucidpress",
                url: "https://www.lucidpress.com/",
                icon: "📄",
                description: "Brand Templates",
            },
        ],
    },
    CommunicationTool {
        name: "Email Marketing Campaigns",
        partner: Affinity::Partly,
        customer: Affinity::Largely,
        category: ToolCategory::Digital,
        resources: &[
            canva("https://www.canva.com/create/email-headers/", "Email Header Templates"),
            DesignResource {
                name: "Mailchimp",
                url: "https://mailchimp.com/create/email-templates/",
                icon: "✉️",
                description: "Email Templates",
            },
            DesignResource {
                name: "Stripo",
                url: "https://stripo.email/",
                icon: "✉️",
                description: "Email Designer",
            },
        ],
    },
    CommunicationTool {
        name: "Video Marketing (YouTube/TikTok/Reels)",
        partner: Affinity::Partly,
        customer: Affinity::Largely,
        category: ToolCategory::Digital,
        resources: &[
            canva("https://www.canva.com/create/videos/", "Video Templates"),
            DesignResource {
                name: "InVideo",
                url: "https://invideo.io/",
                icon: "🎥",
                description: "Video Creation Tool",
            },
            DesignResource {
                name: "CapCut",
                url: "https://www.capcut.com/",
                icon: "✂️",
                description: "Video Editor",
            },
        ],
    },
    CommunicationTool {
        name: "Trade Shows",
        partner: Affinity::Largely,
        customer: Affinity::Partly,
        category: ToolCategory::Events,
        resources: &[
            canva("https://www.canva.com/create/banners/", "Banner Templates"),
            canva("https://www.canva.com/create/presentations/", "Presentation Templates"),
        ],
    },
    CommunicationTool {
        name: "Fairs/Festivals/Movie Shows",
        partner: Affinity::Partly,
        customer: Affinity::Largely,
        category: ToolCategory::Events,
        resources: &[canva(
            "https://www.canva.com/create/event-posters/",
            "Event Poster Templates",
        )],
    },
    CommunicationTool {
        name: "Sampling Events",
        partner: Affinity::Absent,
        customer: Affinity::Largely,
        category: ToolCategory::SalesPromotion,
        resources: &[canva("https://www.canva.com/create/invitations/", "Event Invitations")],
    },
    CommunicationTool {
        name: "Trade Discount/Rebates",
        partner: Affinity::Largely,
        customer: Affinity::Partly,
        category: ToolCategory::SalesPromotion,
        resources: &[],
    },
    CommunicationTool {
        name: "Loyalty Programs",
        partner: Affinity::Partly,
        customer: Affinity::Largely,
        category: ToolCategory::Relationship,
        resources: &[canva(
            "https://www.canva.com/create/loyalty-cards/",
            "Loyalty Card Templates",
        )],
    },
    CommunicationTool {
        name: "Direct Mailing/Catalogues/Telemarketing",
        partner: Affinity::Absent,
        customer: Affinity::Largely,
        category: ToolCategory::Direct,
        resources: &[canva("https://www.canva.com/create/catalogs/", "Catalog Templates")],
    },
    CommunicationTool {
        name: "Community Relations/CSR Drives",
        partner: Affinity::Absent,
        customer: Affinity::Largely,
        category: ToolCategory::Pr,
        resources: &[canva(
            "https://www.canva.com/create/infographics/",
            "Infographic Templates",
        )],
    },
];

pub fn find_tool(name: &str) -> Option<&'static CommunicationTool> {
    COMMUNICATION_TOOLS.iter().find(|tool| tool.name == name)
}
