//! Static page copy.

/// Hero banner text
#[derive(Debug, Clone, Copy)]
pub struct Hero {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub quote: &'static str,
    pub attribution: &'static str,
}

/// A titled card with an emoji icon
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Entrance animation delay
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy)]
pub enum SectionBody {
    Prose(&'static [&'static str]),
    Theories(&'static [Card]),
    /// Boxed paragraphs; the last one is set as the conclusion
    Evidence(&'static [&'static str]),
    Implications(&'static [Card]),
    Quote { text: &'static str, cite: &'static str },
}

/// One fade-in block of the page
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: &'static str,
    pub heading: Option<&'static str>,
    pub body: SectionBody,
}

impl Section {
    /// All text of the section in reading order.
    pub fn text_blocks(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = self.heading.into_iter().collect();
        match self.body {
            SectionBody::Prose(ps) | SectionBody::Evidence(ps) => out.extend(ps.iter().copied()),
            SectionBody::Theories(cards) | SectionBody::Implications(cards) => {
                for c in cards {
                    out.push(c.title);
                    out.push(c.description);
                }
            }
            SectionBody::Quote { text, cite } => {
                out.push(text);
                out.push(cite);
            }
        }
        out
    }
}

pub const HERO: Hero = Hero {
    eyebrow: "Beyond the Observable",
    title: "MULTIVERSE",
    quote: "\"The universe is not only queerer than we suppose, but queerer than we can suppose.\"",
    attribution: "— J.B.S. Haldane",
};

pub const FOOTER: &str = "Requested by @mr49selfmade · Built by @clonkbot";

pub const SECTIONS: &[Section] = &[
    Section {
        id: "is-it-real",
        heading: Some("Is the Multiverse Real?"),
        body: SectionBody::Prose(&[
            "The multiverse hypothesis suggests our universe is just one of potentially infinite parallel realities, each with its own laws of physics, histories, and possibilities. While it sounds like science fiction, this concept emerges from rigorous theoretical physics.",
            "From quantum mechanics to cosmic inflation, multiple independent lines of scientific inquiry point toward a cosmos far stranger and more vast than we ever imagined.",
        ]),
    },
    Section {
        id: "theories",
        heading: Some("Leading Multiverse Theories"),
        body: SectionBody::Theories(&[
            Card {
                icon: "🌊",
                title: "Many-Worlds Interpretation",
                description: "Every quantum measurement splits reality into parallel branches. When you flip a coin, both outcomes occur — in separate universes. Proposed by Hugh Everett in 1957.",
                delay_ms: 0,
            },
            Card {
                icon: "🎈",
                title: "Eternal Inflation",
                description: "The Big Bang wasn't unique. Cosmic inflation continues forever, spawning bubble universes like ours in an endless quantum foam. Each bubble: a new cosmos.",
                delay_ms: 100,
            },
            Card {
                icon: "🎻",
                title: "String Theory Landscape",
                description: "String theory suggests 10^500 possible configurations of extra dimensions. Each configuration yields different physics — perhaps each exists somewhere in the multiverse.",
                delay_ms: 200,
            },
            Card {
                icon: "🔄",
                title: "Cyclic Cosmology",
                description: "Our universe may be one beat in an eternal cosmic pulse — expanding, contracting, and rebirthing. Each cycle spawns a new universe with new initial conditions.",
                delay_ms: 300,
            },
        ]),
    },
    Section {
        id: "evidence",
        heading: Some("The Evidence Question"),
        body: SectionBody::Evidence(&[
            "Can we prove it? This is where science meets philosophy. By definition, other universes exist beyond our observable horizon — we cannot send probes or receive signals from them.",
            "Yet indirect evidence may exist: anomalies in the cosmic microwave background, the fine-tuning of physical constants, and the mathematical elegance of theories that naturally predict multiple universes.",
            "The absence of evidence is not evidence of absence — especially when the evidence, by nature, lies forever beyond our reach.",
        ]),
    },
    Section {
        id: "meaning",
        heading: Some("What Does It Mean?"),
        body: SectionBody::Implications(&[
            Card {
                icon: "♾️",
                title: "Every Possibility",
                description: "In infinite universes, every possible version of you exists. Every choice you didn't make — someone made it.",
                delay_ms: 0,
            },
            Card {
                icon: "🎯",
                title: "Fine-Tuning Explained",
                description: "Why is our universe perfect for life? Perhaps it's selection bias — we exist because we're in a universe that allows it.",
                delay_ms: 0,
            },
            Card {
                icon: "🌌",
                title: "Cosmic Humility",
                description: "Our universe may be one grain of sand on an infinite beach — magnificent and insignificant simultaneously.",
                delay_ms: 0,
            },
        ]),
    },
    Section {
        id: "closing",
        heading: None,
        body: SectionBody::Quote {
            text: "\"Not only is the universe stranger than we think, it is stranger than we can think.\"",
            cite: "— Werner Heisenberg",
        },
    },
];
