// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
// Objectif:
// - Lire une expression DÉJÀ validée caractère par caractère
// - Accumuler les nombres (partie entière, puis décimales après '.')
// - Replier le moins unaire dans le signe du nombre en attente
//
// Règles:
// - '-' est unaire en position 0 ou juste après un autre opérateur :
//   il bascule le signe en attente, rien n’est empilé ("--3" => 3)
// - opérateur binaire : on sort le nombre en attente, on dépile tant que
//   précédence(sommet) >= précédence(entrant) (associativité à gauche), puis on empile
//
// NOTE:
// - Sur une entrée non validée, la sortie n’a pas de sens (pas d’erreur levée ici).

use super::jetons::{est_chiffre, est_espace, Op, Tok};

/// Nombre en cours de lecture.
///
/// Le texte du littéral (chiffres + au plus un point) est gardé tel quel et lu d’un coup
/// à la sortie : lecture correctement arrondie, quelle que soit la longueur.
/// Trop grand => ∞ ; décimales très fines => sous-normal, jamais 0 par erreur.
#[derive(Default, Debug)]
struct NombreEnCours {
    texte: String,
    negatif: bool,
}

impl NombreEnCours {
    fn chiffre(&mut self, c: char) {
        self.texte.push(c);
    }

    fn point(&mut self) {
        // un seul point par littéral (l’entrée validée n’en a jamais deux)
        if !self.texte.contains('.') {
            self.texte.push('.');
        }
    }

    fn bascule_signe(&mut self) {
        self.negatif = !self.negatif;
    }

    /// Sort le nombre en attente (signe appliqué) et remet l’accumulateur à zéro.
    fn sortir(&mut self, out: &mut Vec<Tok>) {
        if !self.texte.bytes().any(|b| b.is_ascii_digit()) {
            return;
        }
        // texte = [0-9]* '.'? [0-9]* avec au moins un chiffre : toujours lisible
        let mut v = match self.texte.parse::<f64>() {
            Ok(v) => v,
            Err(_) => f64::NAN,
        };
        if self.negatif {
            v = -v;
        }
        out.push(Tok::Num(v));
        *self = NombreEnCours::default();
    }
}

/// Convertit une expression infixe validée en séquence postfixe.
///
/// Exemple:
///   expr: "100-100/100"
///   rpn:  [Num(100), Num(100), Num(100), Op(Div), Op(Sub)]
pub fn convert(expr: &str) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Op> = Vec::new();
    let mut nombre = NombreEnCours::default();

    // true au début et après un opérateur : un '-' y est unaire
    let mut attend_operande = true;

    for c in expr.chars().filter(|&c| !est_espace(c)) {
        if est_chiffre(c) {
            nombre.chiffre(c);
            attend_operande = false;
            continue;
        }
        if c == '.' {
            nombre.point();
            attend_operande = false;
            continue;
        }

        let Some(op) = Op::depuis_char(c) else {
            continue;
        };

        if op == Op::Sub && attend_operande {
            nombre.bascule_signe();
            continue;
        }

        nombre.sortir(&mut out);

        while let Some(&top) = ops.last() {
            if top.precedence() >= op.precedence() {
                out.push(Tok::Op(top));
                ops.pop();
            } else {
                break;
            }
        }

        ops.push(op);
        attend_operande = true;
    }

    nombre.sortir(&mut out);

    // vide la pile ops
    while let Some(op) = ops.pop() {
        out.push(Tok::Op(op));
    }

    tracing::trace!(entree = expr, jetons = out.len(), "conversion postfixe");
    out
}
