//! Built-in content catalog.
//!
//! This module provides [`builtin_library`], the single entry-point for the
//! content that ships with Sitewright. The catalog is a set of industry
//! profiles plus the mandatory `default` profile; the core resolver picks
//! seeds per page with industry-first precedence and synthesizes anything
//! neither profile authored.
//!
//! # Authoring rules
//!
//! - Copy may reference `{{BUSINESS_NAME}}` and `{{BUSINESS_DESCRIPTION}}`;
//!   both are substituted at resolution time.
//! - Every seed needs a non-blank title and subtitle. `items` and `cards`
//!   are optional and may be empty.
//! - The `default` profile seeds every page, so no generated site falls
//!   through to synthesized filler unless a page is missing here too.
//! - Industry profiles only override the pages where a tailored voice is
//!   worth it; everything else inherits the default copy.
//!
//! # Adding an industry
//!
//! 1. Write a `static <TAG>_SEEDS: &[PageSeed]` table
//! 2. Register it in [`builtin_library`]
//! 3. Duplicate tags fail construction, so typos surface at startup

use tracing::debug;

use sitewright_core::domain::{
    ContentLibrary, DomainError, IndustryProfile, Page, PageSeed, SeedCard, FALLBACK_TAG,
};

/// Build the content library that ships with the binary.
///
/// Fails only on catalog defects (missing `default` profile, duplicate tag),
/// which construction checks up front.
pub fn builtin_library() -> Result<ContentLibrary, DomainError> {
    let library = ContentLibrary::new(vec![
        IndustryProfile {
            tag: FALLBACK_TAG,
            display_name: "General",
            seeds: DEFAULT_SEEDS,
        },
        IndustryProfile {
            tag: "technology",
            display_name: "Technology",
            seeds: TECHNOLOGY_SEEDS,
        },
        IndustryProfile {
            tag: "cyber-security",
            display_name: "Cyber Security",
            seeds: CYBER_SECURITY_SEEDS,
        },
        IndustryProfile {
            tag: "healthcare",
            display_name: "Healthcare",
            seeds: HEALTHCARE_SEEDS,
        },
        IndustryProfile {
            tag: "restaurant",
            display_name: "Restaurants & Cafes",
            seeds: RESTAURANT_SEEDS,
        },
        IndustryProfile {
            tag: "legal",
            display_name: "Legal Services",
            seeds: LEGAL_SEEDS,
        },
        IndustryProfile {
            tag: "e-commerce",
            display_name: "Online Retail",
            seeds: ECOMMERCE_SEEDS,
        },
        IndustryProfile {
            tag: "fitness",
            display_name: "Fitness & Wellness",
            seeds: FITNESS_SEEDS,
        },
    ])?;

    debug!(profiles = library.profiles().count(), "Content catalog ready");
    Ok(library)
}

// ── Default profile ──────────────────────────────────────────────────────────
//
// Seeds every page. Neutral voice that reads sensibly for any small business.

static DEFAULT_SEEDS: &[PageSeed] = &[
    PageSeed {
        page: Page::Home,
        title: "Welcome to {{BUSINESS_NAME}}",
        subtitle: "{{BUSINESS_DESCRIPTION}}",
        items: &[
            "Friendly, knowledgeable staff",
            "Fair and transparent pricing",
            "A local business you can count on",
        ],
        cards: &[
            SeedCard {
                title: "Quality First",
                body: "Every job gets our full attention, from the first call to the final handshake.",
            },
            SeedCard {
                title: "Here for You",
                body: "Questions are always welcome. Reach out and a real person answers.",
            },
            SeedCard {
                title: "Proudly Local",
                body: "{{BUSINESS_NAME}} is rooted in the community it serves.",
            },
        ],
    },
    PageSeed {
        page: Page::About,
        title: "About {{BUSINESS_NAME}}",
        subtitle: "{{BUSINESS_DESCRIPTION}}",
        items: &[
            "Founded by people who care about the craft",
            "Grown through repeat customers and referrals",
            "Active in the local community",
        ],
        cards: &[
            SeedCard {
                title: "Our Story",
                body: "What started small has grown through word of mouth and honest work.",
            },
            SeedCard {
                title: "Our Promise",
                body: "Clear communication, fair prices, and work we stand behind.",
            },
        ],
    },
    PageSeed {
        page: Page::Services,
        title: "What We Offer",
        subtitle: "A closer look at what {{BUSINESS_NAME}} can do for you.",
        items: &[
            "Free initial quotes with no obligation",
            "Flexible scheduling, including evenings",
            "Satisfaction checked on every job",
        ],
        cards: &[
            SeedCard {
                title: "Consultations",
                body: "Tell us what you need and we will map out the right approach together.",
            },
            SeedCard {
                title: "Ongoing Support",
                body: "We stay available after the work is done, not just before.",
            },
        ],
    },
    PageSeed {
        page: Page::Contact,
        title: "Get in Touch",
        subtitle: "Send a message and the {{BUSINESS_NAME}} team will reply within one business day.",
        items: &[
            "Open Monday to Friday, 9am to 6pm",
            "Walk-ins welcome during business hours",
            "Ask about appointments outside regular hours",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::Gallery,
        title: "Our Work",
        subtitle: "A look at recent projects and moments from {{BUSINESS_NAME}}.",
        items: &[
            "Recent work",
            "Behind the scenes",
            "The team in action",
            "Before and after",
            "Our space",
            "Community events",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::Testimonials,
        title: "What Customers Say",
        subtitle: "Real feedback from people who chose {{BUSINESS_NAME}}.",
        items: &[],
        cards: &[
            SeedCard {
                title: "Jordan M.",
                body: "Professional from start to finish. I would recommend them to anyone.",
            },
            SeedCard {
                title: "Priya S.",
                body: "They took genuine care with every detail. Five stars.",
            },
            SeedCard {
                title: "Sam R.",
                body: "Fast, friendly, and the result speaks for itself.",
            },
        ],
    },
    PageSeed {
        page: Page::Login,
        title: "Welcome Back",
        subtitle: "Sign in to your {{BUSINESS_NAME}} account.",
        items: &[],
        cards: &[],
    },
    PageSeed {
        page: Page::Register,
        title: "Create Your Account",
        subtitle: "Join {{BUSINESS_NAME}} to book faster and keep track of your visits.",
        items: &[],
        cards: &[],
    },
    PageSeed {
        page: Page::Profile,
        title: "Your Profile",
        subtitle: "Manage your details and see your history with {{BUSINESS_NAME}}.",
        items: &[
            "Update contact details",
            "Review past orders and visits",
            "Manage notification preferences",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::Reviews,
        title: "Customer Reviews",
        subtitle: "See what others say about {{BUSINESS_NAME}}, and leave your own.",
        items: &[],
        cards: &[
            SeedCard {
                title: "Recent Ratings",
                body: "Browse the latest feedback from verified customers.",
            },
            SeedCard {
                title: "Share Yours",
                body: "Had a good experience? A short review helps more than you think.",
            },
        ],
    },
    PageSeed {
        page: Page::Chat,
        title: "Live Chat",
        subtitle: "Message the {{BUSINESS_NAME}} team directly.",
        items: &[
            "Typical reply within minutes during business hours",
            "Leave a message after hours and we follow up the next day",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::Search,
        title: "Search",
        subtitle: "Find services, pages, and answers in one place.",
        items: &[
            "Try searching for a service by name",
            "Results update as you type",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::Payments,
        title: "Payments",
        subtitle: "Simple, secure ways to pay {{BUSINESS_NAME}}.",
        items: &[],
        cards: &[
            SeedCard {
                title: "Cards & Digital Wallets",
                body: "All major cards accepted, plus contactless payment.",
            },
            SeedCard {
                title: "Invoices",
                body: "Business customers can request invoicing with net-30 terms.",
            },
        ],
    },
    PageSeed {
        page: Page::Booking,
        title: "Book a Visit",
        subtitle: "Pick a time that suits you and {{BUSINESS_NAME}} will confirm.",
        items: &[
            "Same-week availability in most cases",
            "Free rescheduling up to 24 hours before",
            "Email reminders before your visit",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::Analytics,
        title: "Insights",
        subtitle: "Track engagement across your {{BUSINESS_NAME}} pages.",
        items: &[],
        cards: &[
            SeedCard {
                title: "Traffic",
                body: "See which pages visitors spend the most time on.",
            },
            SeedCard {
                title: "Trends",
                body: "Watch interest grow week over week.",
            },
        ],
    },
    PageSeed {
        page: Page::Locations,
        title: "Find Us",
        subtitle: "Directions and details for every {{BUSINESS_NAME}} location.",
        items: &[
            "Street parking and public transport nearby",
            "Accessible entrance at the main door",
        ],
        cards: &[],
    },
];

// ── Industry profiles ────────────────────────────────────────────────────────

static TECHNOLOGY_SEEDS: &[PageSeed] = &[
    PageSeed {
        page: Page::Home,
        title: "{{BUSINESS_NAME}}: Software That Ships",
        subtitle: "{{BUSINESS_DESCRIPTION}}",
        items: &[
            "Product strategy to production in weeks, not quarters",
            "Senior engineers on every engagement",
            "Transparent, sprint-based delivery",
        ],
        cards: &[
            SeedCard {
                title: "Build",
                body: "Web, mobile, and cloud systems designed to last.",
            },
            SeedCard {
                title: "Modernize",
                body: "Legacy systems brought up to speed without rewrite risk.",
            },
            SeedCard {
                title: "Scale",
                body: "Architecture reviews and performance work for growing products.",
            },
        ],
    },
    PageSeed {
        page: Page::Services,
        title: "Engineering Services",
        subtitle: "From first prototype to production operations, {{BUSINESS_NAME}} covers the stack.",
        items: &[
            "Custom application development",
            "Cloud migration and infrastructure",
            "Technical due diligence and audits",
        ],
        cards: &[
            SeedCard {
                title: "Dedicated Teams",
                body: "A stable team that learns your domain and stays with the product.",
            },
            SeedCard {
                title: "Fixed-Scope Projects",
                body: "Well-defined work delivered on an agreed schedule and budget.",
            },
        ],
    },
    PageSeed {
        page: Page::About,
        title: "The Team Behind the Code",
        subtitle: "{{BUSINESS_NAME}} is engineers first: small, senior, and hands-on.",
        items: &[
            "Average of ten years shipping production software",
            "Contributors to open source you already run",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::Analytics,
        title: "Product Analytics",
        subtitle: "Know what your users actually do, not what you hope they do.",
        items: &[],
        cards: &[
            SeedCard {
                title: "Funnels",
                body: "Follow every signup from landing page to activation.",
            },
            SeedCard {
                title: "Retention",
                body: "Cohort views that show whether changes actually stick.",
            },
        ],
    },
];

static CYBER_SECURITY_SEEDS: &[PageSeed] = &[
    PageSeed {
        page: Page::Home,
        title: "Security Without Compromise",
        subtitle: "{{BUSINESS_NAME}} keeps your systems hardened, monitored, and ready.",
        items: &[
            "24/7 threat monitoring and response",
            "Penetration testing by certified specialists",
            "Compliance support for SOC 2, ISO 27001, and HIPAA",
        ],
        cards: &[
            SeedCard {
                title: "Assess",
                body: "Know your attack surface before someone else maps it for you.",
            },
            SeedCard {
                title: "Defend",
                body: "Layered controls tuned to your environment, not a template.",
            },
            SeedCard {
                title: "Respond",
                body: "When minutes matter, our incident team is already on call.",
            },
        ],
    },
    PageSeed {
        page: Page::Services,
        title: "Security Services",
        subtitle: "Offensive testing, defensive engineering, and everything between.",
        items: &[
            "External and internal penetration tests",
            "Cloud configuration reviews",
            "Employee phishing simulations and training",
        ],
        cards: &[
            SeedCard {
                title: "Managed Detection",
                body: "Around-the-clock monitoring with human analysts behind every alert.",
            },
            SeedCard {
                title: "Incident Response",
                body: "Containment, forensics, and recovery under a single retainer.",
            },
        ],
    },
    PageSeed {
        page: Page::About,
        title: "Why {{BUSINESS_NAME}}",
        subtitle: "Practitioners who spent years on the front line before founding the firm.",
        items: &[
            "Former red-team leads and SOC engineers",
            "Vendor-neutral recommendations, always",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::Contact,
        title: "Talk to a Security Engineer",
        subtitle: "No sales scripts. Describe your situation and get a straight answer.",
        items: &[
            "Urgent incident? Mark your message as priority",
            "NDAs happily signed before any technical discussion",
        ],
        cards: &[],
    },
];

static HEALTHCARE_SEEDS: &[PageSeed] = &[
    PageSeed {
        page: Page::Home,
        title: "Care You Can Trust",
        subtitle: "{{BUSINESS_NAME}} puts patients first with attentive, modern care.",
        items: &[
            "Same-day appointments for urgent needs",
            "Most insurance plans accepted",
            "Friendly staff who know you by name",
        ],
        cards: &[
            SeedCard {
                title: "Preventive Care",
                body: "Regular checkups that catch small issues before they grow.",
            },
            SeedCard {
                title: "Family Friendly",
                body: "From first visits to follow-ups, every age is welcome.",
            },
            SeedCard {
                title: "Clear Answers",
                body: "Plain-language explanations and time for your questions.",
            },
        ],
    },
    PageSeed {
        page: Page::Services,
        title: "Our Services",
        subtitle: "Comprehensive care under one roof at {{BUSINESS_NAME}}.",
        items: &[
            "General consultations and checkups",
            "Vaccinations and screenings",
            "Referrals to trusted specialists",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::Booking,
        title: "Book an Appointment",
        subtitle: "Choose a time online and we will confirm by email.",
        items: &[
            "New patients welcome",
            "Reminders sent the day before",
            "Telehealth slots available weekday afternoons",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::About,
        title: "About Our Practice",
        subtitle: "{{BUSINESS_DESCRIPTION}}",
        items: &[
            "Caring for this community for over a decade",
            "Accredited practitioners and modern facilities",
        ],
        cards: &[],
    },
];

static RESTAURANT_SEEDS: &[PageSeed] = &[
    PageSeed {
        page: Page::Home,
        title: "Come Hungry, Leave Happy",
        subtitle: "{{BUSINESS_NAME}} serves honest food made from scratch, every day.",
        items: &[
            "Seasonal menu from local suppliers",
            "Fresh bakes and daily specials",
            "Room for groups, big tables welcome",
        ],
        cards: &[
            SeedCard {
                title: "From Scratch",
                body: "Stocks, sauces, and dough made in-house every morning.",
            },
            SeedCard {
                title: "Local First",
                body: "Produce and meat sourced from farms we can name.",
            },
            SeedCard {
                title: "All Welcome",
                body: "Vegetarian, vegan, and gluten-free options on every menu.",
            },
        ],
    },
    PageSeed {
        page: Page::Services,
        title: "From the Kitchen",
        subtitle: "Dine in, take away, or let {{BUSINESS_NAME}} cater your event.",
        items: &[
            "Lunch and dinner service seven days a week",
            "Takeaway orders ready in twenty minutes",
            "Catering menus for events of any size",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::Gallery,
        title: "A Taste of the Place",
        subtitle: "Plates, people, and the room at {{BUSINESS_NAME}}.",
        items: &[
            "Tonight's specials",
            "The dining room",
            "Fresh from the oven",
            "Our kitchen crew",
            "Seasonal desserts",
            "Private events",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::Booking,
        title: "Reserve a Table",
        subtitle: "Book online and we will hold your table for fifteen minutes past the hour.",
        items: &[
            "Groups of eight or more, call ahead",
            "Outdoor seating in fair weather",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::Locations,
        title: "Find a Table Near You",
        subtitle: "Every {{BUSINESS_NAME}} location, with hours and directions.",
        items: &[
            "Free parking after 6pm at all locations",
            "Steps from public transport",
        ],
        cards: &[],
    },
];

static LEGAL_SEEDS: &[PageSeed] = &[
    PageSeed {
        page: Page::Home,
        title: "Counsel You Can Rely On",
        subtitle: "{{BUSINESS_NAME}} gives clear advice and strong representation.",
        items: &[
            "Free half-hour initial consultation",
            "Plain-English advice, no jargon",
            "Fixed fees for routine matters",
        ],
        cards: &[
            SeedCard {
                title: "Individuals",
                body: "Family, property, and estate matters handled with care.",
            },
            SeedCard {
                title: "Businesses",
                body: "Contracts, employment, and disputes for growing companies.",
            },
        ],
    },
    PageSeed {
        page: Page::Services,
        title: "Practice Areas",
        subtitle: "Focused expertise across the matters that reach {{BUSINESS_NAME}} most.",
        items: &[
            "Commercial contracts and negotiations",
            "Employment law for employers and employees",
            "Wills, trusts, and probate",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::About,
        title: "Our Firm",
        subtitle: "{{BUSINESS_DESCRIPTION}}",
        items: &[
            "Decades of combined courtroom experience",
            "A reputation built on straight answers",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::Contact,
        title: "Arrange a Consultation",
        subtitle: "Outline your matter and {{BUSINESS_NAME}} will respond within one business day.",
        items: &[
            "All enquiries treated as confidential",
            "Evening appointments by arrangement",
        ],
        cards: &[],
    },
];

static ECOMMERCE_SEEDS: &[PageSeed] = &[
    PageSeed {
        page: Page::Home,
        title: "Shop {{BUSINESS_NAME}}",
        subtitle: "{{BUSINESS_DESCRIPTION}}",
        items: &[
            "Free shipping on orders over fifty dollars",
            "Thirty-day no-questions returns",
            "New arrivals every week",
        ],
        cards: &[
            SeedCard {
                title: "Curated",
                body: "Every product tested by our own team before it lists.",
            },
            SeedCard {
                title: "Fast Dispatch",
                body: "Orders placed before 2pm ship the same day.",
            },
            SeedCard {
                title: "Real Support",
                body: "Humans answer our emails, usually within the hour.",
            },
        ],
    },
    PageSeed {
        page: Page::Payments,
        title: "Ways to Pay",
        subtitle: "Checkout at {{BUSINESS_NAME}} is fast, flexible, and secure.",
        items: &[],
        cards: &[
            SeedCard {
                title: "Cards & Wallets",
                body: "Visa, Mastercard, Amex, plus the wallets on your phone.",
            },
            SeedCard {
                title: "Pay Later",
                body: "Split any order over fifty dollars into four payments.",
            },
        ],
    },
    PageSeed {
        page: Page::Search,
        title: "Find It Fast",
        subtitle: "Search the whole {{BUSINESS_NAME}} range in one box.",
        items: &[
            "Filter by size, color, and price",
            "Search catches typos, so just type",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::Reviews,
        title: "Rated by Shoppers",
        subtitle: "Verified reviews from real {{BUSINESS_NAME}} orders.",
        items: &[],
        cards: &[
            SeedCard {
                title: "Verified Only",
                body: "Reviews come from confirmed purchases, nothing else.",
            },
            SeedCard {
                title: "Photos Welcome",
                body: "See products in real homes before you buy.",
            },
        ],
    },
];

static FITNESS_SEEDS: &[PageSeed] = &[
    PageSeed {
        page: Page::Home,
        title: "Stronger Every Week",
        subtitle: "{{BUSINESS_NAME}} is training that meets you where you are.",
        items: &[
            "Open from 6am to 10pm, seven days",
            "Coaches on the floor at every session",
            "First week free for new members",
        ],
        cards: &[
            SeedCard {
                title: "Small Groups",
                body: "Classes capped at twelve so form never slips.",
            },
            SeedCard {
                title: "Real Programs",
                body: "Structured cycles, not random workouts.",
            },
            SeedCard {
                title: "Every Level",
                body: "Scaled options for day one through competition.",
            },
        ],
    },
    PageSeed {
        page: Page::Services,
        title: "Training Options",
        subtitle: "Pick the format that fits your week at {{BUSINESS_NAME}}.",
        items: &[
            "Group classes across strength and conditioning",
            "One-on-one coaching blocks",
            "Open gym for experienced members",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::Booking,
        title: "Book a Session",
        subtitle: "Reserve your spot; classes fill up a day or two ahead.",
        items: &[
            "Cancel free up to two hours before",
            "Waitlists clear automatically",
        ],
        cards: &[],
    },
    PageSeed {
        page: Page::Testimonials,
        title: "Member Stories",
        subtitle: "What training at {{BUSINESS_NAME}} actually changes.",
        items: &[],
        cards: &[
            SeedCard {
                title: "Alex T.",
                body: "Eighteen months in and I lift double what I started with.",
            },
            SeedCard {
                title: "Maria G.",
                body: "The coaches noticed my knee issue before I did. That is attention.",
            },
        ],
    },
];
