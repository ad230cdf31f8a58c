use super::record::ServiceRecord;

/// Shown when a record has no dedicated icon asset.
pub const FALLBACK_ICON_URL: &str = "https://cdn-icons-png.flaticon.com/128/10307/10307931.png";

// Finite, statically defined table; lookups never probe dynamically.
const CUSTOM_ICONS: &[(&str, &str)] = &[
    ("home-loan-flat-purchase", "https://cdn-icons-gif.flaticon.com/15586/15586092.gif"),
    ("home-loan-house-purchase", "https://cdn-icons-gif.flaticon.com/16677/16677925.gif"),
    ("home-loan-construction", "https://cdn-icons-gif.flaticon.com/15586/15586068.gif"),
    ("plot-purchase-loan", "https://cdn-icons-gif.flaticon.com/19020/19020075.gif"),
    ("takeover-topup-loan", "https://cdn-icons-gif.flaticon.com/15576/15576128.gif"),
    ("loan-against-property", "https://cdn-icons-gif.flaticon.com/17489/17489766.gif"),
    ("education-loan", "https://cdn-icons-gif.flaticon.com/12743/12743767.gif"),
    ("project-loan", "https://cdn-icons-gif.flaticon.com/19032/19032720.gif"),
    ("machine-loan", "https://cdn-icons-gif.flaticon.com/16158/16158485.gif"),
    ("doctor-loan", "https://cdn-icons-gif.flaticon.com/13099/13099871.gif"),
    ("mortgage-registration", "https://cdn-icons-gif.flaticon.com/19035/19035067.gif"),
    ("equitable-mortgage", "https://cdn-icons-gif.flaticon.com/12420/12420695.gif"),
    ("search-report", "https://cdn-icons-gif.flaticon.com/19018/19018144.gif"),
    ("valuation-report", "https://cdn-icons-gif.flaticon.com/19013/19013048.gif"),
    ("estimate-cross-verification", "https://cdn-icons-gif.flaticon.com/19028/19028420.gif"),
    ("construction-estimate", "https://cdn-icons-gif.flaticon.com/12420/12420719.gif"),
    ("ferfar-download", "https://cdn-icons-gif.flaticon.com/19021/19021456.gif"),
    ("property-card", "https://cdn-icons-gif.flaticon.com/14099/14099167.gif"),
    ("charge-creation", "https://cdn-icons-gif.flaticon.com/16678/16678014.gif"),
    ("electric-bill-transfer", "https://cdn-icons-gif.flaticon.com/16438/16438892.gif"),
    ("leave-license", "https://cdn-icons-gif.flaticon.com/15586/15586082.gif"),
];

/// Icon asset for a record id, falling back to the generic document icon.
pub fn icon_url(record_id: &str) -> &'static str {
    CUSTOM_ICONS
        .iter()
        .find(|(id, _)| *id == record_id)
        .map(|(_, url)| *url)
        .unwrap_or(FALLBACK_ICON_URL)
}

/// Glyph names a detail view can render for a record's `icon` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconGlyph {
    Home,
    Building,
    GraduationCap,
    Briefcase,
    Settings,
    User,
    FileSearch,
    BarChart,
    FileCheck,
    FileText,
}

impl IconGlyph {
    /// Unknown or absent icon names resolve to the generic `FileText` glyph.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Home" => Self::Home,
            "Building" => Self::Building,
            "GraduationCap" => Self::GraduationCap,
            "Briefcase" => Self::Briefcase,
            "Settings" => Self::Settings,
            "User" => Self::User,
            "FileSearch" => Self::FileSearch,
            "BarChart" => Self::BarChart,
            "FileCheck" => Self::FileCheck,
            _ => Self::FileText,
        }
    }

    pub fn for_record(record: &ServiceRecord) -> Self {
        Self::from_name(record.icon.as_deref().unwrap_or(""))
    }
}
