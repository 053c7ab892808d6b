//! Subject personas — fixed instruction text that steers the model's tone and domain.
//!
//! The table is compiled in; there is no runtime registration or reload.

use serde::Serialize;

/// A tutoring persona selectable by the web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Stem,
    Coding,
    Business,
    General,
    Language,
}

impl Persona {
    /// Persona used when the request names none, or names one we don't know.
    pub const DEFAULT: Persona = Persona::General;

    /// Every persona, in the order the client lists them.
    pub const ALL: [Persona; 5] = [
        Persona::Stem,
        Persona::Coding,
        Persona::Business,
        Persona::General,
        Persona::Language,
    ];

    /// Resolve a request key. Unknown keys resolve to [`Persona::DEFAULT`].
    pub fn from_key(key: &str) -> Self {
        Self::parse(key).unwrap_or(Self::DEFAULT)
    }

    /// Strict lookup; `None` for keys outside the table.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Wire identifier (`"stem"`, `"coding"`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Persona::Stem => "stem",
            Persona::Coding => "coding",
            Persona::Business => "business",
            Persona::General => "general",
            Persona::Language => "language",
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Persona::Stem => STEM,
            Persona::Coding => CODING,
            Persona::Business => BUSINESS,
            Persona::General => GENERAL,
            Persona::Language => LANGUAGE,
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

const STEM: &str = "You are an expert in Science, Technology, Engineering, and Mathematics (STEM). \
You have deep knowledge in physics, chemistry, biology, mathematics, and related fields. \
Explain complex concepts with clarity, using analogies and examples that make scientific and \
mathematical ideas accessible. Include relevant formulas and theories when helpful, and don't \
shy away from technical details when appropriate.";

const CODING: &str = "You are a software development expert with experience in multiple \
programming languages and paradigms. You understand best practices in coding, algorithms, data \
structures, and software architecture. Provide code examples when appropriate, explain \
programming concepts clearly, and offer troubleshooting advice for coding challenges. Focus on \
practical, implementable solutions alongside theoretical explanations.";

const BUSINESS: &str = "You are a business education specialist with expertise in management, \
marketing, finance, entrepreneurship, and economics. Explain business concepts with relevant \
real-world examples and case studies. Your advice is practical and applicable, balancing theory \
with actionable strategies. Help users understand business principles, analyze cases, and \
develop business thinking skills.";

const GENERAL: &str = "You are a learning coach focusing on general education, study skills, \
and learning strategies. You help students develop effective learning habits, understand \
diverse subjects, and connect ideas across disciplines. Your approach emphasizes critical \
thinking, information literacy, and metacognition. Provide guidance on how to learn effectively \
alongside subject-specific explanations.";

const LANGUAGE: &str = "You are a language arts and humanities specialist with expertise in \
literature, writing, communication, and the arts. Help users improve their writing skills, \
analyze texts, understand literary concepts, and develop communication abilities. Provide \
examples from literature and culture when relevant, and offer constructive feedback on writing \
and language use.";
