//! Rule table for French-language web UIs.
//!
//! # Rationale
//!
//! Product copy generated alongside AI tooling tends to advertise itself:
//! sparkle emoji, "Assistant IA", "Généré par IA" badges and loading text
//! such as "L'IA analyse". These rules rewrite that copy into neutral
//! product language.
//!
//! # Ordering
//!
//! Rules run top to bottom and each sees the output of the previous one.
//! Specific phrases come before the broad `badge…IA` style patterns so they
//! get their dedicated replacement first.

/// Emoji used as AI decoration.
pub(crate) const EMOJI: &[(&str, &str)] = &[
    ("✨", ""),
    ("🤖", ""),
    ("🧠", ""),
    ("🔮", ""),
    ("⚡", ""),
    ("🎯", ""),
    ("🎨", ""),
    ("💡", ""),
    ("🚀", ""),
];

/// Explicit AI wording, loading phrases, labels, prompts and marketing terms.
pub(crate) const PHRASES: &[(&str, &str)] = &[
    // Explicit mentions
    (r"\bAssistant IA\b", "Assistant"),
    (r"\bIntelligence Artificielle\b", "Système automatisé"),
    (r"\bGénéré par IA\b", "Généré automatiquement"),
    (r"\bGénéré par l'IA\b", "Généré automatiquement"),
    (r"\bPowered by AI\b", "Automatisé"),
    (r"\bIA avancée\b", "Système avancé"),
    (r"\bModèle IA\b", "Modèle"),
    (r"\bAlgorithme IA\b", "Algorithme"),
    // Loading states
    ("L'IA analyse", "Analyse en cours"),
    ("L'IA génère", "Génération en cours"),
    ("L'IA traite", "Traitement en cours"),
    ("L'IA prépare", "Préparation en cours"),
    ("Analyse IA en cours", "Analyse en cours"),
    ("Génération IA", "Génération"),
    ("Traitement IA", "Traitement"),
    // Badges and labels
    ("badge.*?IA", "badge"),
    ("label.*?IA", "label"),
    ("tag.*?IA", "tag"),
    // Prompts and placeholders
    ("Posez votre question à l'IA", "Posez votre question"),
    ("Demandez à l'IA", "Rechercher"),
    ("Décrivez ce que vous souhaitez générer", "Description"),
    ("Générer avec l'IA", "Générer"),
    ("Créer avec l'IA", "Créer"),
    // Confidence indicators
    ("Confiance du modèle", "Fiabilité"),
    ("Score IA", "Score"),
    ("Précision IA", "Précision"),
    // Marketing terms
    ("Intelligence augmentée", "Système intelligent"),
    ("Machine Learning", "Apprentissage automatique"),
    ("Deep Learning", "Analyse avancée"),
    ("Neural Network", "Réseau"),
    ("GPT", "Modèle"),
    ("Claude", "Modèle"),
    ("OpenAI", "Service"),
];

/// CSS class fragments stripped from `className`/`class` values.
pub(crate) const CLASS_MARKERS: &[&str] = &[
    "ai-badge",
    "ai-indicator",
    "ai-generated",
    "ai-powered",
    "ai-typing",
    "ai-shimmer",
    "ai-pulse",
    "ai-glow",
    "magic-",
    "sparkle-",
    "robot-",
];
