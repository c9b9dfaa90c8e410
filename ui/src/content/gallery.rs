//! Image URLs are used as-is; nothing checks that they resolve.

pub static HERO_IMAGE: &str =
    "https://www.kirchheim-teck.de/ceasy/resource/21970?maxWidth=1200&maxHeight=1000";

pub static GALLERY_IMAGES: &[&str] = &[
    "https://www.kirchheim-teck.de/ceasy/resource/21970?maxWidth=1200&maxHeight=1000",
    "https://www.kirchheim-teck.de/ceasy/resource/21971?maxWidth=1200&maxHeight=1000",
    "https://www.kirchheim-teck.de/ceasy/resource/21972?maxWidth=1200&maxHeight=1000",
    "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=1200",
    "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?w=1200",
    "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=1200",
];
