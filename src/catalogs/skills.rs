//! Skill alias and context tables.
//!
//! Only universal abbreviations live here; the linguistic backend handles
//! general semantics.

/// Alias -> canonical skill name. Keys are matched case-insensitively.
pub const SKILL_ALIASES: &[(&str, &str)] = &[
    // Degrees and titles
    ("ing.", "ingeniero"),
    ("lic.", "licenciado"),
    ("dr.", "doctor"),
    ("dra.", "doctora"),
    ("msc.", "master"),
    ("phd.", "doctorado"),
    ("bach.", "bachiller"),
    // Languages
    ("esp.", "español"),
    ("eng.", "inglés"),
    ("ing", "inglés"),
    // Seniority
    ("jr.", "junior"),
    ("sr.", "senior"),
    ("mid", "intermedio"),
    // Technology
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("sql", "sql"),
    ("db", "base de datos"),
    ("node.js", "nodejs"),
    ("node", "nodejs"),
    ("react.js", "react"),
    ("reactjs", "react"),
    ("vue.js", "vue"),
    ("k8s", "kubernetes"),
    ("postgres", "postgresql"),
    ("golang", "go"),
    // Soft skills
    ("colab.", "colaboración"),
    ("comunic.", "comunicación"),
];

/// Canonical skill -> semantic context phrase appended by `add_context`.
pub const SKILL_CONTEXT: &[(&str, &str)] = &[
    ("javascript", "programacion web"),
    ("typescript", "programacion web tipado"),
    ("react", "frontend interfaces"),
    ("vue", "frontend interfaces"),
    ("nodejs", "backend servidor"),
    ("python", "programacion backend datos"),
    ("sql", "bases de datos consultas"),
    ("postgresql", "bases de datos relacionales"),
    ("kubernetes", "infraestructura contenedores"),
    ("docker", "infraestructura contenedores"),
];
