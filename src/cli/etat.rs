//! src/cli/etat.rs
//!
//! État de session (sans boucle, sans entrée/sortie).
//!
//! Rôle : porter les variables et les réglages d'une évaluation à l'autre,
//! et offrir les opérations simples dessus.
//!
//! Contrats :
//! - Aucune lecture de ligne ici (pas d'invite, pas d'affichage).
//! - Le noyau n'est appelé qu'en lecture seule sur cet état ; seules les
//!   commandes (`let`, `set`) le modifient.

use crate::noyau::{
    evaluer_expression, format_valeur, ErreurEval, Evaluation, JeuVariables, Reglages,
};

/// Une session interactive : variables + réglages, créés vides/par défaut
/// au démarrage, vivants jusqu'à la fin du processus.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub variables: JeuVariables,
    pub reglages: Reglages,
}

impl Session {
    pub fn nouvelle() -> Self {
        Self::default()
    }

    /// Évalue une expression avec l'état courant de la session.
    pub fn evaluer(&self, texte: &str) -> Result<Evaluation, ErreurEval> {
        evaluer_expression(texte, Some(&self.variables), &self.reglages)
    }

    /// Formate une valeur selon le mode de sortie courant.
    pub fn format(&self, valeur: f64) -> String {
        format_valeur(valeur, self.reglages.mode_sortie)
    }
}
