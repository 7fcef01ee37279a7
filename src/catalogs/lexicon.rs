//! Spanish lexicon used by the rule-based tagger and lemmatizer.
//!
//! Closed word classes are listed exhaustively enough for résumé and job-offer
//! prose; open classes are handled by suffix rules with the exception lists
//! below.

pub const DETERMINERS: &[&str] = &[
    "el", "la", "los", "las", "lo", "un", "una", "unos", "unas",
    "este", "esta", "estos", "estas", "ese", "esa", "esos", "esas",
    "aquel", "aquella", "aquellos", "aquellas",
    "mi", "mis", "tu", "tus", "su", "sus",
    "nuestro", "nuestra", "nuestros", "nuestras",
    "cada", "todo", "toda", "todos", "todas",
    "otro", "otra", "otros", "otras",
    "varios", "varias", "algún", "alguna", "algunos", "algunas",
    "ningún", "ninguna", "mucho", "mucha", "muchos", "muchas",
    "poco", "poca", "pocos", "pocas", "cualquier", "dicho", "dicha",
];

pub const ADPOSITIONS: &[&str] = &[
    "a", "ante", "bajo", "con", "contra", "de", "desde", "durante", "en",
    "entre", "hacia", "hasta", "mediante", "para", "por", "según", "sin",
    "sobre", "tras", "del", "al", "vía",
];

pub const COORDINATING_CONJUNCTIONS: &[&str] = &["y", "e", "o", "u", "ni", "pero", "sino"];

pub const SUBORDINATING_CONJUNCTIONS: &[&str] = &[
    "que", "si", "porque", "aunque", "cuando", "mientras", "como", "donde", "pues",
];

pub const PRONOUNS: &[&str] = &[
    "yo", "tú", "él", "ella", "usted", "ustedes", "nosotros", "nosotras",
    "vosotros", "vosotras", "ellos", "ellas",
    "me", "te", "se", "nos", "os", "le", "les",
    "esto", "eso", "aquello", "quien", "quienes", "cual", "cuales",
    "algo", "alguien", "nada", "nadie", "alguno", "ninguno",
    "mismo", "misma", "mismos", "mismas", "qué", "cómo", "cuándo", "dónde", "cuánto",
];

pub const ADVERBS: &[&str] = &[
    "no", "sí", "muy", "más", "menos", "ya", "aún", "también", "tampoco",
    "siempre", "nunca", "ahora", "antes", "después", "aquí", "allí", "allá",
    "bien", "mal", "así", "solo", "sólo", "tanto", "tan", "casi", "además",
    "luego", "hoy", "ayer", "mañana", "todavía", "bastante",
];

/// Auxiliary verb forms and their lemma
pub const AUXILIARIES: &[(&str, &str)] = &[
    ("ser", "ser"), ("es", "ser"), ("son", "ser"), ("soy", "ser"), ("somos", "ser"),
    ("era", "ser"), ("eran", "ser"), ("fue", "ser"), ("fueron", "ser"),
    ("será", "ser"), ("serán", "ser"), ("sido", "ser"), ("siendo", "ser"), ("sea", "ser"),
    ("estar", "estar"), ("está", "estar"), ("están", "estar"), ("estoy", "estar"),
    ("estamos", "estar"), ("estaba", "estar"), ("estaban", "estar"),
    ("haber", "haber"), ("ha", "haber"), ("han", "haber"), ("he", "haber"), ("has", "haber"),
    ("hemos", "haber"), ("había", "haber"), ("habían", "haber"), ("habido", "haber"),
    ("poder", "poder"), ("puede", "poder"), ("pueden", "poder"), ("podía", "poder"),
    ("podían", "poder"), ("puedo", "poder"), ("podemos", "poder"),
];

/// Inflected verb forms whose lemma suffix rules would get wrong or miss
pub const VERB_FORMS: &[(&str, &str)] = &[
    ("tiene", "tener"), ("tienen", "tener"), ("tengo", "tener"), ("tenemos", "tener"),
    ("tenía", "tener"), ("tenían", "tener"), ("tuvo", "tener"),
    ("debe", "deber"), ("deben", "deber"), ("debo", "deber"),
    ("busca", "buscar"), ("buscan", "buscar"), ("busco", "buscar"),
    ("requiere", "requerir"), ("requieren", "requerir"), ("requerimos", "requerir"),
    ("requerido", "requerir"), ("requerida", "requerir"),
    ("ofrece", "ofrecer"), ("ofrecen", "ofrecer"), ("ofrezco", "ofrecer"),
    ("necesita", "necesitar"), ("necesitan", "necesitar"), ("necesito", "necesitar"),
    ("hace", "hacer"), ("hacen", "hacer"), ("hago", "hacer"), ("hice", "hacer"),
    ("hizo", "hacer"), ("hecho", "hacer"),
    ("sabe", "saber"), ("saben", "saber"), ("sé", "saber"),
    ("conoce", "conocer"), ("conozco", "conocer"),
    ("domina", "dominar"), ("domino", "dominar"),
    ("maneja", "manejar"), ("manejan", "manejar"),
    ("incluye", "incluir"), ("incluyen", "incluir"),
    ("permite", "permitir"), ("permiten", "permitir"),
    ("quiere", "querer"), ("quieren", "querer"), ("queremos", "querer"),
    ("va", "ir"), ("van", "ir"), ("voy", "ir"), ("vamos", "ir"),
    ("posee", "poseer"), ("poseo", "poseer"),
    ("cuento", "contar"), ("contamos", "contar"),
    ("trabajé", "trabajar"), ("trabajó", "trabajar"),
    ("escribiendo", "escribir"), ("construyendo", "construir"),
    ("construido", "construir"), ("dirigido", "dirigir"),
    ("asumir", "asumir"), ("liderando", "liderar"),
    ("aprendió", "aprender"), ("aprendí", "aprender"),
    ("desarrollé", "desarrollar"), ("desarrolló", "desarrollar"),
    ("implementé", "implementar"), ("lideré", "liderar"), ("gestioné", "gestionar"),
    ("participé", "participar"), ("colaboré", "colaborar"),
];

pub const NUMBER_WORDS: &[&str] = &[
    "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
    "diez", "once", "doce", "quince", "veinte", "treinta", "cien", "mil",
];

pub const MONTHS: &[&str] = &[
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
    "septiembre", "setiembre", "octubre", "noviembre", "diciembre",
];

/// Adjectives not caught by suffix rules, with their masculine singular lemma
pub const ADJECTIVES: &[(&str, &str)] = &[
    ("nuevo", "nuevo"), ("nueva", "nuevo"), ("nuevos", "nuevo"), ("nuevas", "nuevo"),
    ("bueno", "bueno"), ("buena", "bueno"), ("buenos", "bueno"), ("buenas", "bueno"),
    ("buen", "bueno"), ("mejor", "mejor"), ("mejores", "mejor"),
    ("gran", "grande"), ("grande", "grande"), ("grandes", "grande"),
    ("alto", "alto"), ("alta", "alto"), ("altos", "alto"), ("altas", "alto"),
    ("amplio", "amplio"), ("amplia", "amplio"), ("amplios", "amplio"), ("amplias", "amplio"),
    ("sólido", "sólido"), ("sólida", "sólido"), ("sólidos", "sólido"), ("sólidas", "sólido"),
    ("excelente", "excelente"), ("excelentes", "excelente"),
    ("senior", "senior"), ("junior", "junior"), ("semi", "semi"),
    ("remoto", "remoto"), ("remota", "remoto"), ("presencial", "presencial"),
    ("híbrido", "híbrido"), ("híbrida", "híbrido"),
    ("full", "full"), ("stack", "stack"),
    ("popular", "popular"), ("similar", "similar"), ("similares", "similar"),
    ("regular", "regular"), ("particular", "particular"), ("familiar", "familiar"),
    ("capaz", "capaz"), ("capaces", "capaz"),
];

/// Words ending like infinitives or participles that are nouns
pub const NOUN_EXCEPTIONS: &[&str] = &[
    "lugar", "hogar", "mujer", "placer", "taller", "par", "mar", "bar",
    "nivel", "carácter", "líder", "máster", "master", "alquiler", "militar",
    "titular", "auxiliar", "celular", "dólar", "comité", "café", "bachiller",
    "mercado", "estado", "resultado", "contenido", "sentido", "partido",
    "grado", "abogado", "empleado", "empleada", "cuidado", "pedido",
    "developer", "manager", "designer", "leader", "server", "docker",
    "container", "cluster", "computer", "user", "router", "power", "partner",
    "freelancer", "tester", "provider", "customer", "owner", "builder",
    "trainer", "speaker", "browser", "controller", "scheduler", "engineer",
];

/// Nouns whose final `s` belongs to the singular
pub const INVARIANT_PLURALS: &[&str] = &[
    "análisis", "crisis", "tesis", "síntesis", "lunes", "martes", "miércoles",
    "jueves", "viernes", "virus", "campus", "status", "bonus", "plus",
    "windows", "devops", "kubernetes", "aws", "sass", "redis", "ios",
];

/// Irregular noun plurals
pub const NOUN_FORMS: &[(&str, &str)] = &[
    ("meses", "mes"), ("países", "país"), ("jóvenes", "joven"),
    ("exámenes", "examen"), ("imágenes", "imagen"), ("órdenes", "orden"),
    ("regímenes", "régimen"), ("caracteres", "carácter"),
    ("veces", "vez"), ("luces", "luz"), ("voces", "voz"), ("matrices", "matriz"),
    ("raíces", "raíz"), ("lápices", "lápiz"),
];
