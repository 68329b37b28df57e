use super::rule_matcher::{
    MatchOptions,
    Matcher,
    MergePolicy,
    Rule,
    RuleSet,
};

/**
 * Hand-curated Spanish categories from before the taxonomy existed. They match the target word
 * itself rather than the gloss, and the pass that uses them also clears out stale rank tags.
 */
const LEGACY_CATEGORIES: &[(&str, &[&str])] = &[
    ("Verbs", &[
        "ser", "estar", "haber", "tener", "hacer", "poder", "decir", "ir", "ver", "dar", "saber",
        "querer", "llegar", "pasar", "deber", "poner", "parecer", "quedar", "creer", "hablar",
        "llevar", "dejarse", "seguir", "encontrar", "llamar", "venir", "pensar", "salir", "volver",
        "tomar", "conocer", "vivir", "sentir", "tratar", "mirar", "contar", "empezar", "esperar",
        "buscar", "existir", "entrar", "trabajar", "escribir", "perder", "producir", "ocurrir",
        "entender", "pedir", "recibir", "recordar", "terminar", "permitir", "aparecer",
        "conseguir", "comenzar", "servir", "sacar", "necesitar", "mantener", "resultar", "leer",
        "caer", "cambiar", "presentar", "crear", "abrir", "considerar", "oír", "acabar",
        "convertir", "ganar", "formar", "traer", "asistir", "morir", "viajar",
    ]),
    ("People", &[
        "hombre", "mujer", "niño", "niña", "niños", "persona", "personas", "gente", "amigo",
        "amiga", "familia", "padre", "madre", "hijo", "hija", "hermano", "hermana", "tío", "tía",
        "abuelo", "abuela", "esposo", "esposa", "marido", "chico", "chica", "señor", "señora",
        "grupo", "humano", "médico", "doctor", "policía", "estudiante", "profesor", "maestro",
        "jefe", "rey", "reina", "presidente", "pueblo", "vecino", "víctima", "actor", "paciente",
    ]),
    ("Time", &[
        "tiempo", "año", "día", "mes", "semana", "hora", "minuto", "segundo", "noche", "tarde",
        "mañana", "ayer", "hoy", "momento", "vez", "siempre", "nunca", "jamás", "ahora",
        "entonces", "luego", "antes", "después", "durante", "mientras", "temprano", "pronto",
        "época", "siglo", "fecha", "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio",
        "agosto", "septiembre", "octubre", "noviembre", "diciembre", "lunes", "martes",
        "miércoles", "jueves", "viernes", "sábado", "domingo", "fin", "principio",
    ]),
    ("Body", &[
        "cuerpo", "mano", "pie", "cabeza", "ojo", "cara", "boca", "brazo", "pierna", "dedo",
        "espalda", "corazón", "sangre", "pelo", "cabello", "piel", "hueso", "cuello", "labio",
        "diente", "nariz", "oreja", "estómago", "pecho", "hombro", "dolor", "salud", "enfermedad",
        "fuerza", "mente", "alma", "sentimiento", "voz", "mirada",
    ]),
    ("Food", &[
        "comida", "agua", "café", "té", "leche", "vino", "cerveza", "pan", "carne", "pollo",
        "pescado", "huevo", "queso", "fruta", "manzana", "naranja", "plátano", "verdura", "arroz",
        "azúcar", "sal", "aceite", "desayuno", "almuerzo", "cena", "restaurante", "hambre", "sed",
        "sabor", "cocina", "mesa", "copa", "vaso", "plato", "comer", "beber",
    ]),
    ("Nature", &[
        "mundo", "tierra", "sol", "luna", "estrella", "cielo", "mar", "río", "lago", "agua",
        "fuego", "aire", "viento", "lluvia", "nieve", "luz", "oscuridad", "día", "noche",
        "montaña", "bosque", "campo", "playa", "piedra", "árbol", "flor", "planta", "animal",
        "perro", "gato", "caballo", "pájaro", "pez", "naturaleza", "vida", "muerte", "frío",
        "calor", "clima",
    ]),
    ("Places", &[
        "lugar", "sitio", "parte", "zona", "país", "nación", "ciudad", "pueblo", "calle", "camino",
        "carretera", "casa", "hogar", "escuela", "colegio", "universidad", "oficina", "trabajo",
        "tienda", "mercado", "hospital", "edificio", "habitación", "cuarto", "sala", "cocina",
        "baño", "suelo", "pared", "puerta", "ventana", "parque", "jardín", "espacio", "centro",
        "norte", "sur", "este", "oeste",
    ]),
    ("Adjectives", &[
        "bueno", "malo", "grande", "pequeño", "alto", "bajo", "largo", "corto", "nuevo", "viejo",
        "joven", "mayor", "bonito", "hermoso", "feo", "fuerte", "débil", "rico", "pobre", "feliz",
        "triste", "difícil", "fácil", "posible", "imposible", "importante", "necesario", "cierto",
        "verdadero", "falso", "libre", "ocupado", "lleno", "vacío", "caliente", "frío", "dulce",
        "rápido", "lento", "duro", "suave", "claro", "oscuro", "blanco", "negro", "rojo", "azul",
        "verde", "amarillo", "gris", "único", "raro", "extraño", "mismo", "otro", "todo",
        "ninguno", "poco", "mucho", "bastante", "demasiado", "mejor", "peor", "propio", "ajeno",
    ]),
    ("Grammar", &[
        "el", "la", "los", "las", "un", "una", "unos", "unas", "y", "o", "pero", "porque", "si",
        "que", "como", "cuando", "donde", "quien", "cual", "cuyo", "para", "por", "en", "a", "de",
        "con", "sin", "desde", "hasta", "hacia", "sobre", "bajo", "entre", "contra", "yo", "tú",
        "él", "ella", "nosotros", "vosotros", "ellos", "mí", "ti", "sí", "me", "te", "le", "lo",
        "nos", "os", "les", "se", "mi", "tu", "su", "nuestro", "vuestro", "este", "ese", "aquel",
        "esto", "eso", "aquello", "aquí", "allí", "allá", "acá", "ya", "todavía", "aún", "casi",
        "muy", "más", "menos", "tan", "así", "bien", "mal", "no", "quizás", "tal vez",
    ]),
];

/// The legacy table as a rule set. Only the verb category carries the infinitive heuristic,
/// and only in its leading-marker form. Rank tags are stripped; no implications apply.
pub fn create_legacy_rules(options: &MatchOptions) -> RuleSet {
    let rules = LEGACY_CATEGORIES
        .iter()
        .map(|(tag, words)| {
            let mut matchers = vec![Matcher::target_in(words.iter().copied())];
            if *tag == options.verb_tag {
                matchers.push(Matcher::infinitive(&options.infinitive_marker, false));
            }
            Rule { tag: tag.to_string(), matchers }
        })
        .collect();

    let policy =
        MergePolicy { strip_prefix: Some(options.rank_prefix.clone()), implied_tags: Vec::new() };

    RuleSet::new("legacy", rules, policy)
}

impl RuleSet {
    pub fn legacy(options: &MatchOptions) -> Self {
        create_legacy_rules(options)
    }
}
