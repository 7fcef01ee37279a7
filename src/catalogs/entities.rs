//! Entity label descriptions and gazetteers for the rule-based recognizer

/// Entity category code -> human-readable label
pub const ENTITY_DESCRIPTIONS: &[(&str, &str)] = &[
    ("PER", "Persona"),
    ("ORG", "Organización"),
    ("LOC", "Lugar"),
    ("MISC", "Misceláneo"),
    ("GPE", "Lugar geopolítico"),
    ("DATE", "Fecha"),
    ("TIME", "Hora"),
    ("MONEY", "Dinero"),
    ("PERCENT", "Porcentaje"),
];

/// Human-readable label for an entity code; unknown codes pass through.
pub fn entity_description(label: &str) -> String {
    ENTITY_DESCRIPTIONS
        .iter()
        .find(|(code, _)| *code == label)
        .map(|(_, description)| description.to_string())
        .unwrap_or_else(|| label.to_string())
}

/// Known places, lower-cased
pub const LOCATIONS: &[&str] = &[
    "ecuador", "quito", "guayaquil", "cuenca", "ambato", "loja", "manta",
    "portoviejo", "machala", "riobamba", "ibarra", "esmeraldas", "latacunga",
    "santo domingo", "pichincha", "guayas", "azuay", "galápagos",
    "colombia", "bogotá", "medellín", "cali", "perú", "lima", "chile",
    "santiago", "argentina", "buenos aires", "méxico", "ciudad de méxico",
    "españa", "madrid", "barcelona", "estados unidos", "miami", "nueva york",
    "latinoamérica", "américa latina", "europa",
];

/// Known organizations, lower-cased
pub const ORGANIZATIONS: &[&str] = &[
    "google", "microsoft", "amazon", "amazon web services", "meta", "apple",
    "ibm", "oracle", "sap", "accenture", "deloitte", "kpmg", "ernst & young",
    "banco pichincha", "banco guayaquil", "banco del pacífico", "produbanco",
    "cnt", "senescyt", "iess", "sri", "naciones unidas", "onu",
    "universidad central del ecuador", "escuela politécnica nacional",
    "espol", "usfq", "puce", "utpl",
];

/// First words that mark an organization name
pub const ORG_CUES: &[&str] = &[
    "universidad", "banco", "empresa", "instituto", "ministerio", "corporación",
    "grupo", "fundación", "colegio", "escuela", "hospital", "cooperativa",
    "compañía", "asociación", "consultora", "agencia", "secretaría",
];

/// Trailing legal-form tokens that mark an organization name
pub const ORG_SUFFIXES: &[&str] = &[
    "s.a", "s.a.", "sa", "inc", "inc.", "corp", "corp.", "ltda", "ltda.",
    "cía", "cia", "sas", "llc", "ltd", "gmbh",
];

/// First words that mark a place name
pub const LOC_CUES: &[&str] = &[
    "provincia", "ciudad", "cantón", "república", "región", "calle", "avenida",
];

/// Common given names that mark a person name
pub const FIRST_NAMES: &[&str] = &[
    "juan", "josé", "luis", "carlos", "jorge", "pedro", "miguel", "andrés",
    "diego", "daniel", "david", "javier", "fernando", "pablo", "santiago",
    "maría", "ana", "lucía", "carmen", "laura", "sofía", "gabriela",
    "andrea", "daniela", "paola", "valeria", "fernanda", "isabel", "patricia",
];

/// Currency words and symbols for money expressions
pub const CURRENCY_WORDS: &[&str] = &[
    "dólares", "dólar", "usd", "euros", "euro", "eur", "pesos", "soles",
];

pub const CURRENCY_SYMBOLS: &[&str] = &["$", "€", "£"];
