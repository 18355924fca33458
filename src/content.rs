//! Static page content: projects, skills, career timeline, testimonials.
//!
//! The site has no backend; everything it displays is compiled in. Keeping
//! the copy here, out of the components, keeps the section views about
//! layout and behavior only.

/// Which part of the portfolio a project belongs to. Drives the grid
/// filter buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCategory {
    Web,
    Mobile,
    Design,
}

pub struct Project {
    pub title: &'static str,
    pub category: ProjectCategory,
    pub blurb: &'static str,
    pub detail: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub demo_url: &'static str,
    pub source_url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Nimbus Dashboard",
        category: ProjectCategory::Web,
        blurb: "Realtime analytics dashboard for small weather stations.",
        detail: "Streams sensor readings over WebSockets into a live chart \
                 wall with configurable alert thresholds and CSV export.",
        tags: &["Rust", "WebAssembly", "WebSockets"],
        image: "img/project-nimbus.svg",
        demo_url: "https://nimbus.example.com",
        source_url: "https://github.com/alexmorgan-dev/nimbus",
    },
    Project {
        title: "Trailhead",
        category: ProjectCategory::Mobile,
        blurb: "Offline-first hiking companion with route sharing.",
        detail: "Caches topo tiles for the selected region, records tracks \
                 in the background, and syncs shared routes when a \
                 connection returns.",
        tags: &["Mobile", "Offline-first", "Maps"],
        image: "img/project-trailhead.svg",
        demo_url: "https://trailhead.example.com",
        source_url: "https://github.com/alexmorgan-dev/trailhead",
    },
    Project {
        title: "Ledgerline",
        category: ProjectCategory::Web,
        blurb: "Invoicing for freelancers who hate invoicing.",
        detail: "Generates branded PDF invoices from tracked hours, chases \
                 late payments politely, and reconciles against bank \
                 exports.",
        tags: &["Web", "PDF", "Payments"],
        image: "img/project-ledgerline.svg",
        demo_url: "https://ledgerline.example.com",
        source_url: "https://github.com/alexmorgan-dev/ledgerline",
    },
    Project {
        title: "Mural Kit",
        category: ProjectCategory::Design,
        blurb: "A component library and brand system for community murals.",
        detail: "Grid templates, a pigment-safe palette generator, and \
                 print-ready export presets used by three neighborhood art \
                 projects.",
        tags: &["Design system", "Branding", "Print"],
        image: "img/project-mural.svg",
        demo_url: "https://muralkit.example.com",
        source_url: "https://github.com/alexmorgan-dev/mural-kit",
    },
    Project {
        title: "Pocket Recipes",
        category: ProjectCategory::Mobile,
        blurb: "Scan a cookbook page, keep the recipe forever.",
        detail: "On-device OCR turns photographed recipes into structured \
                 ingredient lists with unit conversion and a shopping-list \
                 export.",
        tags: &["Mobile", "OCR", "On-device"],
        image: "img/project-recipes.svg",
        demo_url: "https://pocketrecipes.example.com",
        source_url: "https://github.com/alexmorgan-dev/pocket-recipes",
    },
    Project {
        title: "Signal & Noise",
        category: ProjectCategory::Design,
        blurb: "Editorial identity for a long-form engineering newsletter.",
        detail: "Masthead, type ramp, and illustration language for a \
                 12k-subscriber newsletter, plus templates for charts that \
                 survive dark mode.",
        tags: &["Editorial", "Typography", "Illustration"],
        image: "img/project-signal.svg",
        demo_url: "https://signalnoise.example.com",
        source_url: "https://github.com/alexmorgan-dev/signal-noise",
    },
];

pub struct Skill {
    pub name: &'static str,
    /// Bar width target, 0–100.
    pub level: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "Rust & WebAssembly",
        level: 92,
    },
    Skill {
        name: "Frontend engineering",
        level: 88,
    },
    Skill {
        name: "Interface design",
        level: 80,
    },
    Skill {
        name: "Accessibility",
        level: 75,
    },
];

pub struct TimelineEntry {
    pub years: &'static str,
    pub role: &'static str,
    pub org: &'static str,
    pub summary: &'static str,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        years: "2022 — now",
        role: "Senior Frontend Engineer",
        org: "Meridian Labs",
        summary: "Leading the move of a data-heavy product surface to \
                  Rust/WASM, cutting interaction latency roughly in half.",
    },
    TimelineEntry {
        years: "2019 — 2022",
        role: "Product Engineer",
        org: "Copperline Studio",
        summary: "Shipped client work across web and mobile, from brand \
                  sites to an offline field-survey tool.",
    },
    TimelineEntry {
        years: "2016 — 2019",
        role: "UI Developer",
        org: "Freelance",
        summary: "Design-adjacent development for agencies: design systems, \
                  marketing sites, and a lot of careful CSS.",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Alex took a vague brief and returned a product that felt \
                inevitable. The dashboard shipped early and our support \
                tickets about it round to zero.",
        name: "Priya Raman",
        role: "CTO, Meridian Labs",
    },
    Testimonial {
        quote: "Rare combination: pixel-level taste and the engineering \
                depth to make it fast. The mural templates are still in \
                use three years later.",
        name: "Jonas Feld",
        role: "Director, Eastside Arts Collective",
    },
    Testimonial {
        quote: "Every handoff included tests, docs, and a Loom walking us \
                through the edge cases. Working with Alex raised the bar \
                for our whole team.",
        name: "Maria Quintero",
        role: "Engineering Manager, Copperline",
    },
];

/// Site sections, in page order. Shared by the nav, the smooth-scroll
/// targets, and the reveal sweep.
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

pub const OWNER_NAME: &str = "Alex Morgan";
pub const OWNER_TITLE: &str = "Creative Developer & Designer";
