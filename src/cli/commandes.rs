// src/cli/commandes.rs
//
// Commandes de l'invite :
// - `let {lettre} = {expression}` : lier une variable
// - `set angle rad|deg`           : mode d'angle
// - `set sortie normal|sci|ing`   : mode de sortie
// - `help`, `quit` / `exit`
//
// Le premier mot d'une ligne est comparé sans tenir compte de la casse ;
// tout ce qui n'est pas une commande part à l'évaluation comme expression.

use thiserror::Error;

use crate::noyau::{ErreurEval, ModeAngle, ModeSortie};

use super::etat::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Let,
    Set,
    Aide,
    Quitter,
}

/// Reconnaît une commande dans le premier mot d'une ligne.
/// `None` => la ligne entière est une expression.
pub fn commande_depuis_mot(mot: &str) -> Option<Commande> {
    if mot.eq_ignore_ascii_case("let") {
        Some(Commande::Let)
    } else if mot.eq_ignore_ascii_case("set") {
        Some(Commande::Set)
    } else if mot.eq_ignore_ascii_case("help") {
        Some(Commande::Aide)
    } else if mot.eq_ignore_ascii_case("quit") || mot.eq_ignore_ascii_case("exit") {
        Some(Commande::Quitter)
    } else {
        None
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ErreurCommande {
    #[error("nom de variable attendu")]
    NomVariableAttendu,

    #[error("le nom de variable doit tenir en une seule lettre")]
    NomVariableTropLong,

    #[error("le nom de variable doit être une lettre")]
    NomVariableNonAlpha,

    #[error("signe '=' attendu")]
    SigneEgalAttendu,

    #[error("expression attendue")]
    ExpressionAttendue,

    #[error("nom de réglage attendu")]
    NomReglageAttendu,

    #[error("réglage inconnu : {0}")]
    ReglageInconnu(String),

    #[error("valeur attendue pour le réglage")]
    ValeurReglageAttendue,

    #[error("valeur invalide pour le réglage : {0}")]
    ValeurReglageInvalide(String),

    #[error(transparent)]
    Eval(#[from] ErreurEval),
}

/// Détache le premier mot (délimité par des espaces) du reste de la ligne.
pub fn lire_mot(texte: &str) -> (Option<&str>, &str) {
    let texte = texte.trim_start();
    if texte.is_empty() {
        return (None, texte);
    }
    match texte.find(char::is_whitespace) {
        Some(i) => (Some(&texte[..i]), &texte[i..]),
        None => (Some(texte), ""),
    }
}

/// `let {lettre} = {expression}` : évalue puis lie. Si l'évaluation échoue,
/// la variable n'est PAS modifiée (pas de zéro silencieux).
pub fn traiter_let(reste: &str, session: &mut Session) -> Result<(char, f64), ErreurCommande> {
    let (nom, reste) = lire_mot(reste);
    let nom = nom.ok_or(ErreurCommande::NomVariableAttendu)?;

    let mut lettres = nom.chars();
    let lettre = lettres.next().ok_or(ErreurCommande::NomVariableAttendu)?;
    if lettres.next().is_some() {
        return Err(ErreurCommande::NomVariableTropLong);
    }
    if !lettre.is_ascii_alphabetic() {
        return Err(ErreurCommande::NomVariableNonAlpha);
    }

    let (egal, reste) = lire_mot(reste);
    if egal != Some("=") {
        return Err(ErreurCommande::SigneEgalAttendu);
    }

    let expression = reste.trim();
    if expression.is_empty() {
        return Err(ErreurCommande::ExpressionAttendue);
    }

    let evaluation = session.evaluer(expression)?;
    session.variables.definir(lettre, evaluation.valeur);
    Ok((lettre, evaluation.valeur))
}

/// `set {réglage} {valeur}` : ajuste la session et rend un message de
/// confirmation affichable.
pub fn traiter_set(reste: &str, session: &mut Session) -> Result<String, ErreurCommande> {
    let (nom, reste) = lire_mot(reste);
    let nom = nom.ok_or(ErreurCommande::NomReglageAttendu)?;

    if nom.eq_ignore_ascii_case("angle") {
        let (valeur, _) = lire_mot(reste);
        let valeur = valeur.ok_or(ErreurCommande::ValeurReglageAttendue)?;
        let mode = ModeAngle::depuis_nom(valeur)
            .ok_or_else(|| ErreurCommande::ValeurReglageInvalide(valeur.to_string()))?;
        session.reglages.mode_angle = mode;
        Ok(format!("mode d'angle : {}", mode.nom()))
    } else if nom.eq_ignore_ascii_case("sortie") {
        let (valeur, _) = lire_mot(reste);
        let valeur = valeur.ok_or(ErreurCommande::ValeurReglageAttendue)?;
        let mode = ModeSortie::depuis_nom(valeur)
            .ok_or_else(|| ErreurCommande::ValeurReglageInvalide(valeur.to_string()))?;
        session.reglages.mode_sortie = mode;
        Ok(format!("mode de sortie : {}", mode.nom()))
    } else {
        Err(ErreurCommande::ReglageInconnu(nom.to_string()))
    }
}
