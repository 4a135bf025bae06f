use super::{ContentCategoryRule, KeywordRule};

/// Prefix of page-builder module type markers (`et_pb_section`, `et_pb_text`, ...).
pub const MODULE_MARKER_PREFIX: &str = "et_pb_";

pub const SECTION_MARKER: &str = "et_pb_section";
pub const ROW_MARKER: &str = "et_pb_row";
pub const COLUMN_MARKER: &str = "et_pb_column";

pub const UNKNOWN_CATEGORY: &str = "unknown";
pub const UNKNOWN_JSON_CATEGORY: &str = "unknown-json";
pub const FALLBACK_JSON_CATEGORY: &str = "divi-component";
pub const GENERIC_IMAGE_CATEGORY: &str = "image";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "svg", "webp", "bmp", "tiff"];

const fn rule(label: &'static str, keywords: &'static [&'static str]) -> KeywordRule {
    KeywordRule { label, keywords }
}

/// Tags inferred from a file name alone.
pub const FILENAME_TAG_RULES: &[KeywordRule] = &[
    rule("responsive", &["responsive", "mobile", "tablet"]),
    rule(
        "ecommerce",
        &["shop", "store", "ecommerce", "woocommerce", "cart", "checkout"],
    ),
    rule("business", &["business", "corporate", "company", "office"]),
    rule("portfolio", &["portfolio", "gallery", "showcase", "work"]),
    rule("blog", &["blog", "article", "post", "news"]),
    rule("landing", &["landing", "lp", "lead"]),
    rule("header", &["header", "nav", "menu", "navigation"]),
    rule("footer", &["footer"]),
    rule("hero", &["hero", "banner", "jumbotron"]),
    rule("contact", &["contact", "form", "touch"]),
    rule("about", &["about", "team", "staff", "bio"]),
    rule("services", &["service", "feature", "offer"]),
    rule("pricing", &["pricing", "price", "plan", "package"]),
    rule("testimonial", &["testimonial", "review", "feedback"]),
    rule("call-to-action", &["cta", "action", "button"]),
    rule("modern", &["modern", "contemporary", "clean"]),
    rule("creative", &["creative", "artistic", "design"]),
    rule("minimal", &["minimal", "simple", "clean"]),
    rule("dark", &["dark", "night", "black"]),
    rule("light", &["light", "bright", "white"]),
];

/// Ordered: first hit decides the image category.
pub const IMAGE_CATEGORY_RULES: &[KeywordRule] = &[
    rule("hero-image", &["hero", "banner"]),
    rule("background", &["background", "bg"]),
    rule("header-image", &["header"]),
    rule("footer-image", &["footer"]),
    rule("logo", &["logo"]),
    rule("icon", &["icon"]),
    rule("gallery-image", &["gallery"]),
    rule("portfolio-image", &["portfolio"]),
    rule("testimonial-image", &["testimonial"]),
    rule("team-image", &["team", "staff"]),
    rule("product-image", &["product"]),
];

pub const IMAGE_TAG_RULES: &[KeywordRule] = &[
    rule("retina", &["retina", "2x"]),
    rule("thumbnail", &["thumb", "thumbnail"]),
    rule("placeholder", &["placeholder"]),
];

/// Ordered filename fallback for JSON documents without a content signature.
pub const JSON_FILENAME_CATEGORY_RULES: &[KeywordRule] = &[
    rule("layout", &["layout"]),
    rule("section", &["section"]),
    rule("module", &["module"]),
    rule("header", &["header"]),
    rule("footer", &["footer"]),
    rule("page", &["page"]),
    rule("template", &["template"]),
];

/// Tags inferred from the serialized text of a whole page-builder document.
pub const DOCUMENT_TAG_RULES: &[KeywordRule] = &[
    rule("woocommerce", &["woocommerce"]),
    rule("contact-form", &["contact"]),
    rule("gallery", &["gallery"]),
    rule("slider", &["slider"]),
    rule("testimonials", &["testimonial"]),
    rule("pricing", &["pricing"]),
    rule("team", &["team"]),
    rule("portfolio", &["portfolio"]),
    rule("blog", &["blog"]),
    rule("call-to-action", &["cta", "call_to_action"]),
    rule("video", &["video"]),
    rule("audio", &["audio"]),
    rule("map", &["map"]),
    rule("social", &["social"]),
    rule("newsletter", &["newsletter"]),
    rule("accordion", &["accordion"]),
    rule("tabs", &["tabs"]),
    rule("toggle", &["toggle"]),
    rule("countdown", &["countdown"]),
    rule("progress-bar", &["progress"]),
    rule("responsive", &["tablet", "mobile"]),
    rule("animated", &["animation"]),
];

/// Ordered category signatures for a single collection item.
pub const ITEM_CATEGORY_RULES: &[KeywordRule] = &[
    rule("section", &[SECTION_MARKER]),
    rule("row", &[ROW_MARKER]),
    rule("module", &[MODULE_MARKER_PREFIX]),
    rule("layout", &["layout"]),
    rule("template", &["template"]),
    rule("page", &["page"]),
];

pub const ITEM_TAG_RULES: &[KeywordRule] = &[
    rule("responsive", &["responsive"]),
    rule("mobile", &["mobile"]),
    rule("animated", &["animation"]),
    rule("gallery", &["gallery"]),
    rule("slider", &["slider"]),
    rule("contact", &["contact"]),
    rule("portfolio", &["portfolio"]),
    rule("testimonials", &["testimonial"]),
    rule("pricing", &["pricing"]),
    rule("team", &["team"]),
    rule("blog", &["blog"]),
    rule("woocommerce", &["woocommerce"]),
];

pub const SECTION_TAG_RULES: &[KeywordRule] = &[
    rule("gallery", &["gallery"]),
    rule("slider", &["slider"]),
    rule("testimonials", &["testimonial"]),
    rule("pricing", &["pricing"]),
    rule("contact", &["contact"]),
    rule("team", &["team"]),
    rule("portfolio", &["portfolio"]),
    rule("blog", &["blog"]),
    rule("woocommerce", &["woocommerce"]),
];

/// Tags from the body of non-JSON text files.
pub const GENERIC_CONTENT_TAG_RULES: &[KeywordRule] = &[
    rule("responsive", &["responsive"]),
    rule("mobile", &["mobile"]),
    rule("tablet", &["tablet"]),
    rule("animated", &["animation"]),
    rule("jquery", &["jquery"]),
    rule("bootstrap", &["bootstrap"]),
];

pub const TEXT_CONTENT_CATEGORY_RULES: &[ContentCategoryRule] = &[
    ContentCategoryRule {
        extensions: &["css"],
        rules: &[
            rule("responsive-css", &["@media"]),
            rule("animation-css", &["animation", "keyframes"]),
        ],
        fallback: "stylesheet",
    },
    ContentCategoryRule {
        extensions: &["js"],
        rules: &[
            rule("jquery-script", &["jquery"]),
            rule("animation-script", &["animation"]),
        ],
        fallback: "script",
    },
    ContentCategoryRule {
        extensions: &["php"],
        rules: &[
            rule("php-function", &["function"]),
            rule("shortcode", &["shortcode"]),
        ],
        fallback: "php-code",
    },
    ContentCategoryRule {
        extensions: &["html", "htm"],
        rules: &[],
        fallback: "html-template",
    },
];

pub const EXTENSION_CATEGORIES: &[(&str, &str)] = &[
    ("pdf", "document"),
    ("doc", "document"),
    ("docx", "document"),
    ("txt", "text-file"),
    ("md", "markdown"),
    ("xml", "xml-data"),
    ("svg", "vector-graphic"),
    ("psd", "photoshop-file"),
    ("ai", "illustrator-file"),
    ("sketch", "sketch-file"),
    ("fig", "figma-file"),
    ("zip", "archive"),
    ("rar", "archive"),
    ("woff", "font-file"),
    ("woff2", "font-file"),
    ("ttf", "font-file"),
    ("otf", "font-file"),
];
