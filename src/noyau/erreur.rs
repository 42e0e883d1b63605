//! Erreurs du noyau.
//!
//! Toute défaillance du balayage ou de l'analyse revient à l'appelant par ce
//! canal unique. Rien ne panique sur une entrée utilisateur.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Dépassement de la capacité de la suite de jetons au balayage.
    #[error("trop de jetons dans l'expression")]
    TropDeJetons,

    /// L'analyse exigeait un type de jeton et en a trouvé un autre.
    /// Couvre aussi les parenthèses non appariées, le reste après une
    /// expression complète et un caractère hors alphabet au balayage.
    #[error("jeton inattendu")]
    JetonInattendu,

    /// Littéral numérique mal formé (deux points décimaux).
    #[error("nombre mal formé")]
    FormatNombre,

    /// Référence à une lettre sans valeur associée.
    #[error("variable '{0}' introuvable")]
    VariableIntrouvable(char),
}
