/// One entry of the macOS `AppIcon.appiconset` catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub filename: &'static str,
}

/// Pixel sizes the asset catalog references. `@2x` slots reuse the file of
/// twice the base size, e.g. 16pt@2x and 32pt@1x both point at the 32px PNG.
pub const MACOS_ICON_SET: &[IconSpec] = &[
    IconSpec {
        size: 16,
        filename: "app_icon_16.png",
    },
    IconSpec {
        size: 32,
        filename: "app_icon_32.png",
    },
    IconSpec {
        size: 64,
        filename: "app_icon_64.png",
    },
    IconSpec {
        size: 128,
        filename: "app_icon_128.png",
    },
    IconSpec {
        size: 256,
        filename: "app_icon_256.png",
    },
    IconSpec {
        size: 512,
        filename: "app_icon_512.png",
    },
    IconSpec {
        size: 1024,
        filename: "app_icon_1024.png",
    },
];
