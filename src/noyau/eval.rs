//! Noyau — évaluation (pipeline réel)
//!
//! balayage -> analyse/évaluation en une passe (pas d'AST)
//!
//! L'appelant fournit la chaîne, un jeu de variables optionnel et les
//! réglages ; il récupère la valeur et une copie des variables visibles
//! pendant l'évaluation (résultat autonome, inspectable après coup).

use tracing::debug;

use super::analyse::analyser_jetons;
use super::erreur::ErreurEval;
use super::jetons::format_jetons;
use super::lecture::balayer;
use super::reglages::Reglages;
use super::variables::JeuVariables;

/// Résultat d'une évaluation réussie.
#[derive(Clone, Debug)]
pub struct Evaluation {
    pub valeur: f64,

    /// Copie des variables visibles pendant l'évaluation, pas un alias :
    /// l'appelant peut inspecter "ce qui était connu" sans garder la session.
    pub variables: JeuVariables,
}

/// API publique : évalue une expression et rend sa valeur.
///
/// - `variables` absent => aucun nom n'est résoluble, toute référence échoue
/// - les réglages ne sont jamais modifiés par le noyau
/// - première erreur de balayage ou d'analyse = retour immédiat, pas de
///   résultat partiel
pub fn evaluer_expression(
    texte: &str,
    variables: Option<&JeuVariables>,
    reglages: &Reglages,
) -> Result<Evaluation, ErreurEval> {
    let variables = variables.cloned().unwrap_or_default();

    // 1) Jetons
    let suite = balayer(texte)?;
    debug!(jetons = %format_jetons(suite.jetons()), "balayage");

    // 2) Analyse + évaluation en une passe
    let valeur = analyser_jetons(suite.jetons(), &variables, reglages)?;
    debug!(valeur, "évaluation");

    Ok(Evaluation { valeur, variables })
}
