use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantArray};

/// Services a visitor can ask about on the contact form.
///
/// The display form is what the form posts and what ends up in the email payload.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    IntoStaticStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
pub enum Service {
    #[strum(serialize = "Digital Marketing")]
    DigitalMarketing,
    #[strum(serialize = "Performance Marketing")]
    PerformanceMarketing,
    #[strum(serialize = "Social Media Marketing")]
    SocialMediaMarketing,
    #[strum(serialize = "SEO & Analytics")]
    SeoAnalytics,
    #[strum(serialize = "Content Creation")]
    ContentCreation,
    #[strum(serialize = "Branding")]
    Branding,
}

impl Service {
    pub fn slug(&self) -> &'static str {
        match self {
            Service::DigitalMarketing => "digital-marketing",
            Service::PerformanceMarketing => "performance-marketing",
            Service::SocialMediaMarketing => "social-media-marketing",
            Service::SeoAnalytics => "seo-analytics",
            Service::ContentCreation => "content-creation",
            Service::Branding => "branding",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|s| s.slug() == slug)
    }
}
