//! Copy for the landing page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphicKind {
    Dashboard,
    Creative,
    Training,
    Architecture,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub number: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub deliverables: [&'static str; 4],
    pub outcome: &'static str,
    pub cta: &'static str,
    pub graphic: GraphicKind,
}

/// Short card shown in the hero for each service.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServicePreview {
    pub id: &'static str,
    pub number: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub target: u64,
    pub suffix: &'static str,
    pub caption: &'static str,
    /// Width of the progress bar under the number, in percent.
    pub bar_percent: u8,
}

/// A heading with a one-line gloss, used by the paradox and principle grids.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Principle {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        id: "operations",
        number: "01",
        title: "Intelligent Operations",
        tagline: "Systems that think while you work.",
        description: "AI-powered operations running in the background, handling lead flow, client communication, and workflow orchestration autonomously.",
        deliverables: [
            "Self-managing CRMs",
            "Autonomous scheduling",
            "Real-time dashboards",
            "Predictive planning",
        ],
        outcome: "Your business, but self-aware.",
        cta: "Explore Operations",
        graphic: GraphicKind::Dashboard,
    },
    Service {
        id: "creative",
        number: "02",
        title: "Creative Systems",
        tagline: "Content that evolves with your brand.",
        description: "AI-driven creative engines that generate, personalize, and scale content without losing your brand voice.",
        deliverables: [
            "Brand Voice Dev",
            "Adaptive Systems",
            "Video & Copy Gen",
            "Campaign Intel",
        ],
        outcome: "Creativity at speed of thought.",
        cta: "See Creative Systems",
        graphic: GraphicKind::Creative,
    },
    Service {
        id: "training",
        number: "03",
        title: "Training & Adoption",
        tagline: "Teaching your team to think with AI.",
        description: "Custom workshops, playbooks, and hands-on enablement to help teams use AI confidently, ethically, and strategically.",
        deliverables: [
            "Dept Onboarding",
            "Custom GPT Creation",
            "Literacy Workshops",
            "Change Management",
        ],
        outcome: "AI fluency, not just tools.",
        cta: "Build AI Fluency",
        graphic: GraphicKind::Training,
    },
    Service {
        id: "architecture",
        number: "04",
        title: "Custom Architecture",
        tagline: "Bespoke AI built for your workflow.",
        description: "Proprietary AI systems, from predictive models to internal copilots, tailored to how your business actually operates.",
        deliverables: [
            "Custom GPTs",
            "Predictive Analytics",
            "Knowledge Systems",
            "Decision Support",
        ],
        outcome: "Intelligence that fits like a glove.",
        cta: "Build Custom AI",
        graphic: GraphicKind::Architecture,
    },
];

pub const PREVIEWS: [ServicePreview; 4] = [
    ServicePreview {
        id: "operations",
        number: "01",
        title: "Intelligent Operations",
        subtitle: "Self-managing systems",
    },
    ServicePreview {
        id: "creative",
        number: "02",
        title: "Creative Systems",
        subtitle: "AI-powered creation",
    },
    ServicePreview {
        id: "training",
        number: "03",
        title: "Training & Adoption",
        subtitle: "Human-AI integration",
    },
    ServicePreview {
        id: "architecture",
        number: "04",
        title: "Custom Architecture",
        subtitle: "Tailored intelligence",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        id: 1,
        quote: "Aitoma didn't just automate our workflow; they completely redesigned how we think about client data. It feels like the company gained 20 IQ points overnight.",
        author: "James Dolan",
        role: "CTO",
        company: "VentureFlow",
    },
    Testimonial {
        id: 2,
        quote: "The training modules were a game changer. Our team went from fearing AI to building their own custom GPTs in two weeks. Adoption is at an all-time high.",
        author: "Elena Rodriguez",
        role: "Head of Ops",
        company: "ScaleUp Inc.",
    },
    Testimonial {
        id: 3,
        quote: "We've seen a 300% increase in content velocity without adding headcount. The creative intelligence system preserves our voice perfectly across every channel.",
        author: "Marcus Chen",
        role: "Director of Product",
        company: "Nexus",
    },
];

pub const PROCESS_STEPS: [ProcessStep; 5] = [
    ProcessStep { step: "01", title: "Discover", description: "Map your system" },
    ProcessStep { step: "02", title: "Design", description: "Architect solutions" },
    ProcessStep { step: "03", title: "Develop", description: "Build & integrate" },
    ProcessStep { step: "04", title: "Deploy", description: "Launch & monitor" },
    ProcessStep { step: "05", title: "Evolve", description: "Optimize & scale" },
];

pub const METRICS: [Metric; 4] = [
    Metric {
        label: "Efficiency",
        target: 500,
        suffix: "+",
        caption: "Hours Saved / Mo",
        bar_percent: 85,
    },
    Metric {
        label: "Content Scale",
        target: 10,
        suffix: "x",
        caption: "Output Velocity",
        bar_percent: 92,
    },
    Metric {
        label: "Adoption Rate",
        target: 95,
        suffix: "%",
        caption: "Team Utilization",
        bar_percent: 95,
    },
    Metric {
        label: "Cost Reduction",
        target: 40,
        suffix: "%",
        caption: "OpEx Savings",
        bar_percent: 40,
    },
];

/// Bar heights of the small adoption histogram, in percent.
pub const ADOPTION_BARS: [u8; 10] = [30, 45, 35, 60, 55, 75, 65, 90, 85, 95];

pub const PARADOXES: [Principle; 3] = [
    Principle { title: "Drowning in tech", subtitle: "Starving for thinking" },
    Principle { title: "Automating tasks", subtitle: "Ignoring systems" },
    Principle { title: "Chasing efficiency", subtitle: "Losing intelligence" },
];

pub const PRINCIPLES: [Principle; 3] = [
    Principle { title: "Think like designers", subtitle: "Creative, intentional solutions" },
    Principle { title: "Build like engineers", subtitle: "Precise, robust systems" },
    Principle { title: "Operate like partners", subtitle: "Long-term collaboration" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previews_line_up_with_services() {
        assert_eq!(PREVIEWS.len(), SERVICES.len());
        for (preview, service) in PREVIEWS.iter().zip(SERVICES.iter()) {
            assert_eq!(preview.id, service.id);
            assert_eq!(preview.number, service.number);
            assert_eq!(preview.title, service.title);
        }
    }

    #[test]
    fn metric_bars_are_percentages() {
        assert!(METRICS.iter().all(|m| m.bar_percent <= 100));
        assert!(ADOPTION_BARS.iter().all(|h| *h <= 100));
    }
}
