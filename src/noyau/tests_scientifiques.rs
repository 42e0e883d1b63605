//! Tests scientifiques (campagne) : scénarios de bout en bout.
//!
//! Tout passe par le pipeline complet (balayage + analyse + évaluation),
//! avec les réglages et les variables d'une vraie session.

use std::f64::consts::PI;

use super::eval::evaluer_expression;
use super::reglages::{ModeAngle, Reglages};
use super::variables::JeuVariables;

fn eval_ok(texte: &str) -> f64 {
    evaluer_expression(texte, None, &Reglages::default())
        .unwrap_or_else(|e| panic!("expr={texte:?} erreur={e}"))
        .valeur
}

fn eval_avec(texte: &str, variables: &JeuVariables, reglages: &Reglages) -> f64 {
    evaluer_expression(texte, Some(variables), reglages)
        .unwrap_or_else(|e| panic!("expr={texte:?} erreur={e}"))
        .valeur
}

fn assert_proche(texte: &str, attendu: f64, tolerance: f64) {
    let obtenu = eval_ok(texte);
    assert!(
        (obtenu - attendu).abs() <= tolerance,
        "expr={texte:?} attendu={attendu} obtenu={obtenu}"
    );
}

/* ------------------------ Scénarios littéraux ------------------------ */

#[test]
fn sci_addition() {
    assert_eq!(eval_ok("2+4"), 6.0);
}

#[test]
fn sci_puissance_chainee() {
    assert_proche("(2*4/6)^8", 9.98872123151958, 1e-9);
}

#[test]
fn sci_trig_imbriquee() {
    assert_proche("cos(arctan(sin(pi/2)))", 0.7071067811865476, 1e-9);
}

#[test]
fn sci_logarithmes() {
    assert_proche("ln(e^2)+log(10)", 3.0, 1e-9);
}

#[test]
fn sci_expression_avec_variables() {
    let mut vars = JeuVariables::nouveau();
    vars.definir('x', 2.0);
    vars.definir('y', 3.0);
    vars.definir('z', 4.0);

    let valeur = eval_avec("2*x + 5*y + 3 * z^2", &vars, &Reglages::default());
    assert_eq!(valeur, 67.0);
}

/* ------------------------ Précédence et associativité ------------------------ */

#[test]
fn sci_associativite_gauche() {
    assert_eq!(eval_ok("2-3-4"), -5.0);
    assert_eq!(eval_ok("16/4/2"), 2.0);
}

#[test]
fn sci_precedence() {
    assert_eq!(eval_ok("2+3*4"), 14.0);
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
}

#[test]
fn sci_puissance_pliee_a_gauche() {
    assert_eq!(eval_ok("2^3^2"), 64.0);
}

/* ------------------------ Modes d'angle ------------------------ */

#[test]
fn sci_sinus_en_degres() {
    let reglages = Reglages {
        mode_angle: ModeAngle::Degres,
        ..Reglages::default()
    };
    let valeur = eval_avec("sin(90)", &JeuVariables::nouveau(), &reglages);
    assert!((valeur - 1.0).abs() < 1e-12, "obtenu={valeur}");
}

#[test]
fn sci_sinus_en_radians() {
    assert_proche("sin(pi/2)", 1.0, 1e-12);
}

#[test]
fn sci_arc_sans_conversion_du_resultat() {
    // même en degrés, arcsin rend des radians
    let reglages = Reglages {
        mode_angle: ModeAngle::Degres,
        ..Reglages::default()
    };
    let valeur = eval_avec("arcsin(1)", &JeuVariables::nouveau(), &reglages);
    assert!((valeur - PI / 2.0).abs() < 1e-12, "obtenu={valeur}");
}

#[test]
fn sci_le_mode_ne_touche_que_la_trig_directe() {
    // ln/log ignorent le mode d'angle
    let reglages = Reglages {
        mode_angle: ModeAngle::Degres,
        ..Reglages::default()
    };
    let valeur = eval_avec("ln(e)", &JeuVariables::nouveau(), &reglages);
    assert!((valeur - 1.0).abs() < 1e-12);
}

/* ------------------------ Constantes ------------------------ */

#[test]
fn sci_constantes_repliees_au_balayage() {
    assert_proche("pi", PI, 0.0);
    assert_proche("2*pi", 2.0 * PI, 0.0);
    assert_proche("e", std::f64::consts::E, 0.0);
}

/* ------------------------ Chemins d'erreur ------------------------ */

#[test]
fn sci_variable_non_liee() {
    use super::erreur::ErreurEval;

    let erreur = evaluer_expression("x+1", None, &Reglages::default()).unwrap_err();
    assert_eq!(erreur, ErreurEval::VariableIntrouvable('x'));
}

#[test]
fn sci_session_complete() {
    // une session : on lie des variables au fil de l'eau, comme `let` le fait
    let reglages = Reglages::default();
    let mut vars = JeuVariables::nouveau();

    let r = evaluer_expression("3*3", Some(&vars), &reglages).unwrap();
    vars.definir('a', r.valeur);

    let r = evaluer_expression("a+1", Some(&vars), &reglages).unwrap();
    vars.definir('b', r.valeur);

    let r = evaluer_expression("a*b", Some(&vars), &reglages).unwrap();
    assert_eq!(r.valeur, 90.0);

    // le résultat porte la photographie des variables connues
    assert_eq!(r.variables.obtenir('a'), Some(9.0));
    assert_eq!(r.variables.obtenir('b'), Some(10.0));
}
