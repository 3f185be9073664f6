pub const CONTAINER: &str = "container mx-auto px-6 py-10 max-w-4xl";
pub const CONTAINER_SM: &str = "container mx-auto px-6 py-10 max-w-2xl";

pub const CARD: &str = "bg-white border border-pink-100 rounded-2xl shadow-md p-6";
pub const CARD_HOVER: &str = "bg-white border border-pink-100 rounded-2xl shadow-md p-6 transform transition-transform duration-200 hover:scale-105";
pub const CARD_SECTION: &str = "bg-gray-50 border border-gray-200 p-3 rounded-lg";
pub const ALERT_CARD: &str = "p-4 rounded-lg shadow-md mb-6";

pub const INPUT_BASE: &str = "appearance-none border border-gray-300 bg-white text-gray-800 rounded-md w-full py-2 px-4 focus:outline-none focus:border-pink-400";
pub const INPUT_GROUP: &str = "flex-1 flex flex-col gap-2";

pub const BUTTON_BASE: &str = "px-5 py-2 rounded-lg font-medium text-white transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "bg-pink-500 hover:bg-pink-600 focus:ring-2 focus:ring-pink-300 focus:outline-none";
pub const BUTTON_SECONDARY: &str = "bg-gray-400 hover:bg-gray-500 focus:outline-none";
pub const BUTTON_DANGER: &str = "bg-red-500 hover:bg-red-600 focus:ring-2 focus:ring-red-300 focus:outline-none";
pub const BUTTON_FULL: &str = "w-full py-3 px-5 font-semibold rounded-lg mt-6";

pub const TEXT_LABEL: &str = "block text-sm font-semibold text-gray-700";
pub const TEXT_ERROR: &str = "text-sm text-red-500 font-semibold";
pub const TEXT_MUTED: &str = "text-sm text-gray-500";
pub const HEADING_LG: &str = "text-3xl font-extrabold mb-4 text-center text-gray-800";
pub const HEADING_MD: &str = "text-2xl font-bold mb-4 text-gray-800";
pub const HEADING_SM: &str = "text-lg font-semibold mb-2 text-gray-800";

pub const FLEX_BETWEEN: &str = "flex justify-between items-center";
pub const SPACE_Y_BASE: &str = "space-y-3";
pub const SPACE_Y_LG: &str = "space-y-6";

pub const BADGE_BASE: &str = "inline-block px-2 py-0.5 rounded-full text-xs font-semibold text-white";
pub const PROGRESS_TRACK: &str = "h-1.5 bg-gray-200 rounded mt-2 overflow-hidden";
pub const LOADING: &str = "flex justify-center p-8 animate-pulse text-gray-500";

/// Pastel backgrounds cycled across vote cards.
pub const CARD_TINTS: [&str; 5] = ["bg-green-50", "bg-red-50", "bg-blue-50", "bg-gray-100", "bg-yellow-50"];

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button_primary(full_width: bool) -> String {
    if full_width {
        combine_classes(BUTTON_BASE, &combine_classes(BUTTON_PRIMARY, BUTTON_FULL))
    } else {
        combine_classes(BUTTON_BASE, BUTTON_PRIMARY)
    }
}

pub fn badge(color: &str) -> String {
    combine_classes(BADGE_BASE, color)
}

pub fn alert_style(style: &str) -> String {
    match style {
        "error" => combine_classes(ALERT_CARD, "bg-red-500 text-white"),
        "success" => combine_classes(ALERT_CARD, "bg-green-500 text-white"),
        "warning" => combine_classes(ALERT_CARD, "bg-yellow-500 text-white"),
        _ => combine_classes(ALERT_CARD, "bg-blue-500 text-white"),
    }
}
