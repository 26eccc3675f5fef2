// DOM hooks and static assets used by the web front-end.

// Background canvases, stacked behind the page content
pub const GRID_CANVAS_ID: &str = "grid-canvas";
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";

// Countdown digits, one element per unit: "countdown-days", "countdown-hours", ...
pub const COUNTDOWN_ID_PREFIX: &str = "countdown-";
pub const COUNTDOWN_TICK_MS: i32 = 1000;

// Gallery
pub const GALLERY_IMAGES: [&str; 5] = ["/1.jpg", "/2.jpg", "/3.jpg", "/4.jpg", "/5.jpg"];
pub const GALLERY_CURRENT_ID: &str = "gallery-current";
pub const GALLERY_NEXT_ID: &str = "gallery-next";
pub const GALLERY_COUNTER_ID: &str = "gallery-counter";
pub const GALLERY_DOT_ID_PREFIX: &str = "gallery-dot-"; // indicator bar per image
pub const GALLERY_TICK_MS: i32 = 100; // polling period driving the rotator clock

// FAQ: "faq-question-{i}" is clickable, "faq-item-{i}" receives the open class
pub const FAQ_QUESTION_ID_PREFIX: &str = "faq-question-";
pub const FAQ_ITEM_ID_PREFIX: &str = "faq-item-";

// Class names toggled by the widgets
pub const ACTIVE_CLASS: &str = "active";
pub const OPEN_CLASS: &str = "open";

// Sections faded in once they scroll into view: "reveal-0", "reveal-1", ...
pub const REVEAL_ID_PREFIX: &str = "reveal-";
pub const IN_VIEW_CLASS: &str = "in-view";

// Radial glow behind the hero title, drifting with scroll
pub const HERO_GLOW_ID: &str = "hero-glow";
