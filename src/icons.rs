//! The fixed iOS app icon table.
//!
//! Every entry maps one required icon slot to a square pixel size and to the
//! metadata Xcode expects in `Contents.json`. The table is the single source of
//! truth for both the PNG filenames and the manifest, so the two can never
//! drift apart.
//!
//! ```text
//! label        px     file                  idiom           scale
//! 20x20@2x     40     icon-20x20@2x.png     iphone          2x
//! 20x20@3x     60     icon-20x20@3x.png     iphone          3x
//! 29x29@2x     58     icon-29x29@2x.png     iphone          2x
//! 29x29@3x     87     icon-29x29@3x.png     iphone          3x
//! 40x40@2x     80     icon-40x40@2x.png     iphone          2x
//! 40x40@3x     120    icon-40x40@3x.png     iphone          3x
//! 60x60@2x     120    icon-60x60@2x.png     iphone          2x
//! 60x60@3x     180    icon-60x60@3x.png     iphone          3x
//! 1024x1024    1024   icon-1024.png         ios-marketing   1x
//! ```

/// Default location of the asset catalog, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "ios/MassageChairControl/Images.xcassets/AppIcon.appiconset";

/// Label of the App Store marketing icon, which gets a shortened filename.
const MARKETING_LABEL: &str = "1024x1024";

/// Recommended source resolution.
pub const RECOMMENDED_SOURCE_SIZE: u32 = 1024;

/// One required icon slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    /// Slot label, e.g. `20x20@2x`. Drives the output filename.
    pub label: &'static str,
    /// Edge length of the square bitmap in pixels.
    pub pixels: u32,
    /// Xcode device idiom.
    pub idiom: &'static str,
    /// Scale factor as Xcode writes it (`2x`).
    pub scale: &'static str,
    /// Nominal size in points (`20x20`).
    pub size: &'static str,
}

impl IconSpec {
    const fn iphone(label: &'static str, pixels: u32, scale: &'static str, size: &'static str) -> Self {
        Self {
            label,
            pixels,
            idiom: "iphone",
            scale,
            size,
        }
    }

    /// Output filename for this slot.
    ///
    /// The marketing icon is `icon-1024.png`; every other slot is
    /// `icon-<label>.png`.
    pub fn filename(&self) -> String {
        if self.label == MARKETING_LABEL {
            "icon-1024.png".to_string()
        } else {
            format!("icon-{}.png", self.label)
        }
    }
}

pub const ICON_SIZES: [IconSpec; 9] = [
    IconSpec::iphone("20x20@2x", 40, "2x", "20x20"),
    IconSpec::iphone("20x20@3x", 60, "3x", "20x20"),
    IconSpec::iphone("29x29@2x", 58, "2x", "29x29"),
    IconSpec::iphone("29x29@3x", 87, "3x", "29x29"),
    IconSpec::iphone("40x40@2x", 80, "2x", "40x40"),
    IconSpec::iphone("40x40@3x", 120, "3x", "40x40"),
    IconSpec::iphone("60x60@2x", 120, "2x", "60x60"),
    IconSpec::iphone("60x60@3x", 180, "3x", "60x60"),
    // App Store
    IconSpec {
        label: MARKETING_LABEL,
        pixels: 1024,
        idiom: "ios-marketing",
        scale: "1x",
        size: "1024x1024",
    },
];
