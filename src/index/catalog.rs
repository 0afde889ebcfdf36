//! Static seed catalog
//!
//! Well-known apps, site pages and account links that are searchable before
//! the remote collection has answered.

use super::{join_url, SearchItem, FALLBACK_IMAGE};

/// One hard-coded catalog entry with a target relative to the site root
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub keywords: &'static [&'static str],
    pub target: &'static str,
    pub icon: Option<&'static str>,
}

impl CatalogEntry {
    pub fn to_item(&self, base_url: &str) -> SearchItem {
        SearchItem::new(
            self.id,
            self.name,
            self.category,
            self.keywords.iter().copied(),
            join_url(base_url, self.target),
            join_url(base_url, self.icon.unwrap_or(FALLBACK_IMAGE)),
        )
    }
}

const fn app(
    id: &'static str,
    name: &'static str,
    category: &'static str,
    keywords: &'static [&'static str],
    target: &'static str,
    icon: &'static str,
) -> CatalogEntry {
    CatalogEntry { id, name, category, keywords, target, icon: Some(icon) }
}

const fn page(
    id: &'static str,
    name: &'static str,
    category: &'static str,
    keywords: &'static [&'static str],
    target: &'static str,
) -> CatalogEntry {
    CatalogEntry { id, name, category, keywords, target, icon: None }
}

pub const ENTRIES: &[CatalogEntry] = &[
    // Apps
    app(
        "vlc-player",
        "VLC Media Player",
        "Media",
        &["vlc", "media", "player", "video"],
        "app.html?id=vlc-player",
        "assets/img/apps/vlc.png",
    ),
    app(
        "7zip",
        "7-Zip",
        "Utilities",
        &["7zip", "zip", "archive", "compression", "extract"],
        "app.html?id=7zip",
        "assets/img/apps/7zip.png",
    ),
    app(
        "google-chrome",
        "Google Chrome",
        "Browsers",
        &["chrome", "google", "browser", "web"],
        "app.html?id=google-chrome",
        "assets/img/apps/chrome.png",
    ),
    app(
        "firefox",
        "Mozilla Firefox",
        "Browsers",
        &["firefox", "mozilla", "browser", "web"],
        "app.html?id=firefox",
        "assets/img/apps/firefox.png",
    ),
    app(
        "notepad-plus-plus",
        "Notepad++",
        "Utilities",
        &["notepad", "editor", "text", "code"],
        "app.html?id=notepad-plus-plus",
        "assets/img/apps/notepadpp.png",
    ),
    app(
        "nvidia-drivers",
        "NVIDIA GeForce Drivers",
        "Drivers",
        &["nvidia", "geforce", "gpu", "graphics", "driver"],
        "drivers.html#nvidia",
        "assets/img/drivers/nvidia.png",
    ),
    app(
        "amd-drivers",
        "AMD Radeon Drivers",
        "Drivers",
        &["amd", "radeon", "ryzen", "gpu", "graphics", "driver"],
        "drivers.html#amd",
        "assets/img/drivers/amd.png",
    ),
    app(
        "intel-drivers",
        "Intel Graphics Drivers",
        "Drivers",
        &["intel", "iris", "graphics", "chipset", "driver"],
        "drivers.html#intel",
        "assets/img/drivers/intel.png",
    ),
    app(
        "realtek-audio",
        "Realtek Audio Driver",
        "Drivers",
        &["realtek", "audio", "sound", "driver"],
        "drivers.html#realtek",
        "assets/img/drivers/realtek.png",
    ),
    // Site pages
    page("home", "Home", "Page", &["home", "main", "start"], "index.html"),
    page("all-apps", "All Apps", "Page", &["apps", "downloads", "software", "library"], "apps.html"),
    page("drivers", "Drivers", "Page", &["drivers", "hardware", "gpu"], "drivers.html"),
    page("speed-test", "Speed Test", "Page", &["speed", "internet", "bandwidth", "test"], "speedtest.html"),
    page("stats", "Site Stats", "Page", &["stats", "statistics", "downloads", "counter"], "stats.html"),
    page("about", "About Us", "Page", &["about", "team", "info"], "about.html"),
    page("contact", "Contact", "Page", &["contact", "support", "email", "help"], "contact.html"),
    // Account
    page("login", "Login", "Account", &["login", "sign in", "signin", "account"], "login.html"),
    page("signup", "Sign Up", "Account", &["signup", "register", "create account"], "signup.html"),
    page("profile", "My Profile", "Account", &["profile", "account", "settings"], "profile.html"),
    page("dashboard", "Admin Dashboard", "Account", &["admin", "dashboard", "manage"], "admin.html"),
];

/// Driver vendors recognised by the assistant, mapped to catalog ids
pub const DRIVER_VENDORS: &[(&str, &str)] = &[
    ("nvidia", "nvidia-drivers"),
    ("geforce", "nvidia-drivers"),
    ("amd", "amd-drivers"),
    ("radeon", "amd-drivers"),
    ("intel", "intel-drivers"),
    ("realtek", "realtek-audio"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut seen = HashSet::new();
        for entry in ENTRIES {
            assert!(seen.insert(entry.id), "duplicate id {}", entry.id);
        }
    }

    #[test]
    fn test_catalog_keywords_are_lowercase() {
        for entry in ENTRIES {
            for keyword in entry.keywords {
                assert_eq!(*keyword, keyword.to_lowercase(), "{}", entry.id);
            }
        }
    }

    #[test]
    fn test_driver_vendors_point_at_catalog() {
        let ids: HashSet<_> = ENTRIES.iter().map(|e| e.id).collect();
        for (_, id) in DRIVER_VENDORS {
            assert!(ids.contains(id), "vendor target {} missing", id);
        }
    }

    #[test]
    fn test_fallback_icon_for_pages() {
        let item = ENTRIES.iter().find(|e| e.id == "home").unwrap().to_item("https://hub.test");
        assert_eq!(item.img, "https://hub.test/assets/img/default-app.png");
        assert_eq!(item.path, "https://hub.test/index.html");
    }
}
