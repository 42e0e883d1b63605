//! src/cli/invite.rs
//!
//! Boucle interactive : une ligne à la fois.
//!
//! - premier mot = commande éventuelle (let/set/help/quit/exit)
//! - sinon : la ligne entière part à l'évaluation
//! - une erreur s'affiche sur une ligne et la session continue
//! - fin d'entrée (EOF) : sortie propre

use std::io::{self, BufRead, Write};

use super::commandes::{commande_depuis_mot, lire_mot, traiter_let, traiter_set, Commande};
use super::etat::Session;

const INVITE: &str = "(calc) ";

const AIDE: &str = "\
Expressions : évaluer une expression mathématique. Opérateurs de base
(+, -, *, / et ^), fonctions trigonométriques (sin, cos, tan, arcsin,
arccos, arctan), logarithmes (log et ln), constantes (pi et e).

Variables : syntaxe `let {lettre} = {valeur}`. Lie la variable {lettre}
(une seule lettre, majuscules et minuscules distinctes) à {valeur},
qui peut être n'importe quelle expression valide.

Réglages : syntaxe `set {réglage} {valeur}`.
  set angle rad|deg          unité des arguments de sin/cos/tan
  set sortie normal|sci|ing  format d'affichage des résultats

quit / exit : quitter. help : ce message.";

/// Lance l'invite sur stdin/stdout jusqu'à `quit` ou fin d'entrée.
pub fn lancer(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut ligne = String::new();

    loop {
        stdout.write_all(INVITE.as_bytes())?;
        stdout.flush()?;

        ligne.clear();
        // fin d'entrée : sortie propre
        if stdin.lock().read_line(&mut ligne)? == 0 {
            break;
        }

        let entree = ligne.trim();
        let (premier, reste) = lire_mot(entree);
        let Some(premier) = premier else {
            continue; // ligne vide
        };

        match commande_depuis_mot(premier) {
            Some(Commande::Quitter) => break,

            Some(Commande::Aide) => println!("{AIDE}"),

            Some(Commande::Let) => match traiter_let(reste, session) {
                Ok((lettre, valeur)) => println!("{lettre} = {}", session.format(valeur)),
                Err(e) => affiche_erreur(&e.to_string()),
            },

            Some(Commande::Set) => match traiter_set(reste, session) {
                Ok(message) => println!("{message}"),
                Err(e) => affiche_erreur(&e.to_string()),
            },

            None => evaluer_et_afficher(entree, session),
        }
    }

    Ok(())
}

/// Mode direct : chaque argument du processus est une expression, évaluée
/// contre la même session, puis le processus se termine.
pub fn evaluer_tout(expressions: &[String], session: &Session) {
    for texte in expressions {
        evaluer_et_afficher(texte, session);
    }
}

fn evaluer_et_afficher(texte: &str, session: &Session) {
    match session.evaluer(texte) {
        Ok(evaluation) => println!("{texte} = {}", session.format(evaluation.valeur)),
        Err(e) => affiche_erreur(&e.to_string()),
    }
}

fn affiche_erreur(info: &str) {
    println!("Erreur de syntaxe : {info}.");
}
