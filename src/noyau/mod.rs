//! Noyau d'évaluation (flottant double précision)
//!
//! Organisation interne :
//! - jetons.rs    : modèle de jeton + suite bornée
//! - lecture.rs   : balayage (chaîne -> jetons)
//! - analyse.rs   : descente récursive + évaluation en ligne
//! - variables.rs : jeu de variables (52 lettres)
//! - reglages.rs  : mode d'angle + mode de sortie
//! - format.rs    : affichage des valeurs
//! - erreur.rs    : erreurs du noyau
//! - eval.rs      : pipeline complet

pub mod analyse;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod reglages;
pub mod variables;

#[cfg(test)]
mod tests_scientifiques;


#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{evaluer_expression, Evaluation};
pub use format::format_valeur;
pub use reglages::{ModeAngle, ModeSortie, Reglages};
pub use variables::JeuVariables;
