//! Static detector catalog shown on the landing page.
//!
//! DESIGN
//! ======
//! The catalog is compiled in and never fetched. Entry order is the display
//! order, and `id` doubles as the image asset key and the `/predict/{id}`
//! path segment, so the server validates detector ids against this same list.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Directory that holds one `{id}.png` per detector.
pub const IMAGE_DIR: &str = "/static/images";

/// Image shown when a detector's own image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder.png";

/// Inline `onerror` handler for card images.
///
/// Cards are server-rendered and the browser may fail the image fetch before
/// hydration attaches any listener, so the swap lives in the markup itself.
/// It clears itself first, so a missing placeholder cannot loop.
#[must_use]
pub fn image_fallback_handler() -> String {
    format!("this.onerror=null;this.src='{PLACEHOLDER_IMAGE}'")
}

/// Deployment status of a detector model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectorStatus {
    Ready,
    Pending,
}

impl DetectorStatus {
    /// Value used for `data-status` and badge modifier classes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Pending => "pending",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Pending => "Coming Soon",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Ready => "✓",
            Self::Pending => "⏳",
        }
    }
}

/// One selectable detection model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetectorDescriptor {
    /// Stable key; also names the image asset and the prediction route.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub status: DetectorStatus,
    /// External app link. Present for ready detectors.
    pub link: Option<&'static str>,
}

impl DetectorDescriptor {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.status == DetectorStatus::Ready
    }

    #[must_use]
    pub fn image_src(&self) -> String {
        format!("{IMAGE_DIR}/{}.png", self.id)
    }

    /// Resolve what the card's action control should be.
    #[must_use]
    pub fn action(&self) -> CardAction {
        match (self.status, self.link) {
            (DetectorStatus::Ready, Some(href)) => CardAction::Launch { href },
            _ => CardAction::Unavailable,
        }
    }
}

/// Action control rendered at the bottom of a detector card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    /// Enabled outbound link opening in a new browsing context.
    Launch { href: &'static str },
    /// Disabled control with no navigable target.
    Unavailable,
}

pub const CATALOG: &[DetectorDescriptor] = &[
    DetectorDescriptor {
        id: "brain_tumor",
        name: "Brain Tumor",
        description: "Detection of brain tumors from MRI scans using deep learning",
        status: DetectorStatus::Ready,
        link: Some("https://brain--tumor.streamlit.app/"),
    },
    DetectorDescriptor {
        id: "lymphoma_cancer",
        name: "Lymphoma Cancer",
        description: "Classification of lymphoma cancer from medical images",
        status: DetectorStatus::Ready,
        link: Some("https://lymphoma-cancer.streamlit.app/"),
    },
    DetectorDescriptor {
        id: "oral_cancer",
        name: "Oral Cancer",
        description: "Early detection of oral cancer from clinical images",
        status: DetectorStatus::Ready,
        link: Some("https://oral--cancer.streamlit.app/"),
    },
    DetectorDescriptor {
        id: "cervical_cancer",
        name: "Cervical Cancer",
        description: "Cervical cancer screening from pap smear images",
        status: DetectorStatus::Ready,
        link: Some("https://cervical.streamlit.app/"),
    },
    DetectorDescriptor {
        id: "breast_cancer",
        name: "Breast Cancer",
        description: "Breast cancer detection from mammography and ultrasound images",
        status: DetectorStatus::Ready,
        link: Some("https://breast-cancer-he.streamlit.app/"),
    },
    DetectorDescriptor {
        id: "lung_colon_cancer",
        name: "Lung & Colon Cancer",
        description: "Detection of lung and colon cancer from histopathology images",
        status: DetectorStatus::Ready,
        link: Some("https://lungcolon.streamlit.app/"),
    },
    DetectorDescriptor {
        id: "kidney_stone",
        name: "Kidney H&E",
        description: "Detection of kidney grade",
        status: DetectorStatus::Ready,
        link: Some("https://kidney-hande.streamlit.app/"),
    },
    DetectorDescriptor {
        id: "all_cancer",
        name: "All Cancer",
        description: "Multi-organ cancer detection from various medical images",
        status: DetectorStatus::Ready,
        link: Some("https://all-cancer.streamlit.app/"),
    },
];

/// Look up a detector by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static DetectorDescriptor> {
    CATALOG.iter().find(|d| d.id == id)
}

/// Number of entries in `detectors` that are ready.
#[must_use]
pub fn ready_count(detectors: &[DetectorDescriptor]) -> usize {
    detectors.iter().filter(|d| d.is_ready()).count()
}
