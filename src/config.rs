use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const OWNER_NAME: &str = "Bradley Magomere";
pub const OWNER_ALIAS: &str = "Director Brad";

// Dial-able digits for wa.me, and the human formatted number shown on the page
pub const PHONE_DIGITS: &str = "254746480706";
pub const PHONE_DISPLAY: &str = "+254 746 480706";
pub const EMAIL: &str = "magomerebrad018@gmail.com";
pub const WHATSAPP_GREETING: &str =
    "Hello Director Brad, I saw your portfolio website and would like to discuss a project.";

pub const INSTAGRAM_PROFILE: &str = "https://www.instagram.com/Urban_brad_finesse";
pub const TIKTOK_PROFILE: &str = "https://www.tiktok.com/@director_brad";

// Served from assets/ by trunk
pub const HERO_IMAGE: &str = "/assets/hero.svg";
pub const HEADSHOT_IMAGE: &str = "/assets/headshot.svg";
pub const HERO_FALLBACK: &str = "https://placehold.co/1200x600/16151A/FFE4D0?text=Visual+Load+Failed";
pub const HEADSHOT_FALLBACK: &str = "https://placehold.co/350x350/262626/FFE4D0?text=Image+Load+Failed";
pub const GALLERY_FALLBACK: &str = "https://placehold.co/600x400/16151A/FFE4D0?text=Gallery+Failed";

/// How long the portfolio shows its spinner after mounting, so embed
/// scripts get a head start before the cards appear.
pub const PORTFOLIO_SETTLE_MS: u32 = 500;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn local_images_are_shipped() {
        for url in [HERO_IMAGE, HEADSHOT_IMAGE] {
            let relative = url.trim_start_matches('/');
            let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(relative);
            assert!(path.is_file(), "{} is not in the repo", path.display());
        }
    }
}
