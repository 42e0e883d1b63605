// src/noyau/jetons.rs

use super::erreur::ErreurEval;

/// Capacité fixe d'une suite de jetons.
pub const MAX_JETONS: usize = 1000;

/// Fonctions unaires reconnues. Ensemble fermé, pas d'extension utilisateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    ArcSin,
    ArcCos,
    ArcTan,
    Log10,
    LogNaturel,
}

impl Fonction {
    /// Nom tel qu'il s'écrit dans une expression.
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::ArcSin => "arcsin",
            Fonction::ArcCos => "arccos",
            Fonction::ArcTan => "arctan",
            Fonction::Log10 => "log",
            Fonction::LogNaturel => "ln",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    // NOTE: le balayage ne produit jamais de Nombre négatif,
    // le signe passe par l'opérateur '-'.
    Nombre(f64),

    /// Un caractère de l'ensemble + - * / ^.
    Operateur(char),

    ParGauche,
    ParDroite,

    Fonction(Fonction),

    /// Une lettre ASCII seule (tout ce qui n'est ni fonction ni constante).
    Variable(char),
}

/// Suite bornée de jetons : remplie une fois par le balayage,
/// consommée une fois par l'analyse (curseur strictement croissant).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SuiteJetons {
    jetons: Vec<Jeton>,
}

impl SuiteJetons {
    pub fn nouvelle() -> Self {
        Self { jetons: Vec::new() }
    }

    /// Ajoute un jeton. Le dépassement de capacité est une erreur
    /// terminale de balayage, jamais une perte silencieuse.
    pub fn ajouter(&mut self, jeton: Jeton) -> Result<(), ErreurEval> {
        if self.jetons.len() >= MAX_JETONS {
            return Err(ErreurEval::TropDeJetons);
        }
        self.jetons.push(jeton);
        Ok(())
    }

    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    pub fn len(&self) -> usize {
        self.jetons.len()
    }

    pub fn est_vide(&self) -> bool {
        self.jetons.is_empty()
    }
}

/// Format utilitaire (debug) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::new();
    for j in jetons {
        let s = match j {
            Jeton::Nombre(v) => format!("{v}"),
            Jeton::Operateur(op) => op.to_string(),
            Jeton::ParGauche => "(".to_string(),
            Jeton::ParDroite => ")".to_string(),
            Jeton::Fonction(f) => f.nom().to_string(),
            Jeton::Variable(lettre) => lettre.to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
