//! Static TLD tables backing the registry.
//!
//! Every table is lowercase, strictly sorted ascending, and duplicate-free
//! so that `binary_search` in the parent module is sound. The four category
//! tables are pairwise disjoint; `LOCAL_TLDS` sits outside the categories
//! and is only consulted by the allow-local validation path.
//!
//! The generic table is a curated snapshot, not a live mirror of the IANA
//! root zone; `domain-vet audit` diffs it against the published list.

/// TLDs reserved for DNS infrastructure.
pub(super) const INFRASTRUCTURE_TLDS: &[&str] = &[
    "arpa",
];

/// General-purpose top-level domains.
pub(super) const GENERIC_TLDS: &[&str] = &[
    "academy",
    "aero",
    "agency",
    "app",
    "art",
    "asia",
    "bio",
    "blog",
    "build",
    "cafe",
    "capital",
    "cat",
    "cloud",
    "club",
    "codes",
    "coffee",
    "com",
    "community",
    "company",
    "cool",
    "coop",
    "design",
    "dev",
    "digital",
    "directory",
    "domains",
    "edu",
    "email",
    "engineering",
    "expert",
    "finance",
    "fitness",
    "foundation",
    "fund",
    "gallery",
    "games",
    "global",
    "gold",
    "gov",
    "guru",
    "health",
    "host",
    "house",
    "info",
    "institute",
    "int",
    "international",
    "jobs",
    "law",
    "life",
    "link",
    "live",
    "media",
    "mil",
    "mobi",
    "museum",
    "net",
    "network",
    "news",
    "ninja",
    "online",
    "org",
    "page",
    "partners",
    "photo",
    "photography",
    "pictures",
    "pizza",
    "plus",
    "post",
    "press",
    "pub",
    "red",
    "rocks",
    "run",
    "school",
    "science",
    "services",
    "shop",
    "site",
    "social",
    "software",
    "solutions",
    "space",
    "store",
    "studio",
    "style",
    "support",
    "systems",
    "team",
    "tech",
    "technology",
    "tel",
    "today",
    "tools",
    "top",
    "town",
    "toys",
    "trade",
    "training",
    "travel",
    "tube",
    "university",
    "vip",
    "watch",
    "website",
    "wiki",
    "work",
    "works",
    "world",
    "wtf",
    "xxx",
    "zone",
];

/// Generic TLDs with registration restrictions.
pub(super) const GENERIC_RESTRICTED_TLDS: &[&str] = &[
    "biz",
    "name",
    "pro",
];

/// ISO 3166-derived country-code TLDs.
pub(super) const COUNTRY_CODE_TLDS: &[&str] = &[
    "ac",
    "ad",
    "ae",
    "af",
    "ag",
    "ai",
    "al",
    "am",
    "ao",
    "aq",
    "ar",
    "as",
    "at",
    "au",
    "aw",
    "ax",
    "az",
    "ba",
    "bb",
    "bd",
    "be",
    "bf",
    "bg",
    "bh",
    "bi",
    "bj",
    "bm",
    "bn",
    "bo",
    "br",
    "bs",
    "bt",
    "bv",
    "bw",
    "by",
    "bz",
    "ca",
    "cc",
    "cd",
    "cf",
    "cg",
    "ch",
    "ci",
    "ck",
    "cl",
    "cm",
    "cn",
    "co",
    "cr",
    "cu",
    "cv",
    "cw",
    "cx",
    "cy",
    "cz",
    "de",
    "dj",
    "dk",
    "dm",
    "do",
    "dz",
    "ec",
    "ee",
    "eg",
    "er",
    "es",
    "et",
    "eu",
    "fi",
    "fj",
    "fk",
    "fm",
    "fo",
    "fr",
    "ga",
    "gb",
    "gd",
    "ge",
    "gf",
    "gg",
    "gh",
    "gi",
    "gl",
    "gm",
    "gn",
    "gp",
    "gq",
    "gr",
    "gs",
    "gt",
    "gu",
    "gw",
    "gy",
    "hk",
    "hm",
    "hn",
    "hr",
    "ht",
    "hu",
    "id",
    "ie",
    "il",
    "im",
    "in",
    "io",
    "iq",
    "ir",
    "is",
    "it",
    "je",
    "jm",
    "jo",
    "jp",
    "ke",
    "kg",
    "kh",
    "ki",
    "km",
    "kn",
    "kp",
    "kr",
    "kw",
    "ky",
    "kz",
    "la",
    "lb",
    "lc",
    "li",
    "lk",
    "lr",
    "ls",
    "lt",
    "lu",
    "lv",
    "ly",
    "ma",
    "mc",
    "md",
    "me",
    "mg",
    "mh",
    "mk",
    "ml",
    "mm",
    "mn",
    "mo",
    "mp",
    "mq",
    "mr",
    "ms",
    "mt",
    "mu",
    "mv",
    "mw",
    "mx",
    "my",
    "mz",
    "na",
    "nc",
    "ne",
    "nf",
    "ng",
    "ni",
    "nl",
    "no",
    "np",
    "nr",
    "nu",
    "nz",
    "om",
    "pa",
    "pe",
    "pf",
    "pg",
    "ph",
    "pk",
    "pl",
    "pm",
    "pn",
    "pr",
    "ps",
    "pt",
    "pw",
    "py",
    "qa",
    "re",
    "ro",
    "rs",
    "ru",
    "rw",
    "sa",
    "sb",
    "sc",
    "sd",
    "se",
    "sg",
    "sh",
    "si",
    "sj",
    "sk",
    "sl",
    "sm",
    "sn",
    "so",
    "sr",
    "ss",
    "st",
    "su",
    "sv",
    "sx",
    "sy",
    "sz",
    "tc",
    "td",
    "tf",
    "tg",
    "th",
    "tj",
    "tk",
    "tl",
    "tm",
    "tn",
    "to",
    "tr",
    "tt",
    "tv",
    "tw",
    "tz",
    "ua",
    "ug",
    "uk",
    "us",
    "uy",
    "uz",
    "va",
    "vc",
    "ve",
    "vg",
    "vi",
    "vn",
    "vu",
    "wf",
    "ws",
    "ye",
    "yt",
    "za",
    "zm",
    "zw",
];

/// Pseudo-TLDs for unqualified local networks. Not part of any category;
/// recognized only when the allow-local policy is in effect.
pub(super) const LOCAL_TLDS: &[&str] = &[
    "localdomain",
    "localhost",
];
