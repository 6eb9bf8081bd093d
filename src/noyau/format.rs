// src/noyau/format.rs
//
// Lecture décimale d’un résultat f64.
// - expansion EXACTE du binaire (n / 2^k  =  n·5^k / 10^k)
// - arrondi “au pair” à 28 chiffres significatifs
// - zéros finaux retirés (forme normalisée)
// - notation : simple si exposant <= 0 et exposant ajusté >= -6, sinon scientifique
//
// Exemples : 14.0 -> "14", 20.0 -> "2E+1", 0.5 -> "0.5",
//            0.1 -> "0.1000000000000000055511151231"

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Nombre de chiffres significatifs conservés.
pub const PRECISION: usize = 28;

/// Seuil (exposant ajusté) sous lequel on passe en scientifique.
const SEUIL_SCIENTIFIQUE: i64 = -6;

fn pow_big(base: u32, n: usize) -> BigInt {
    BigInt::from(base).pow(n as u32)
}

/// Coefficient entier + exposant base 10 : valeur = coef · 10^exp
#[derive(Clone, Debug, PartialEq, Eq)]
struct Decimal {
    neg: bool,
    coef: BigInt,
    exp: i64,
}

impl Decimal {
    /// Expansion exacte d’un f64 fini.
    fn depuis_f64(v: f64) -> Option<Self> {
        let neg = v.is_sign_negative();
        let r = BigRational::from_float(v)?.abs();

        // dénominateur = 2^k (toujours une puissance de deux pour un f64)
        let mut k: usize = 0;
        let mut d = r.denom().clone();
        let deux = BigInt::from(2);
        while !d.is_one() {
            d /= &deux;
            k += 1;
        }

        Some(Self {
            neg,
            coef: r.numer() * pow_big(5, k),
            exp: -(k as i64),
        })
    }

    fn nb_chiffres(&self) -> usize {
        self.coef.to_str_radix(10).len()
    }

    /// Arrondi au pair (half-even) à `prec` chiffres significatifs.
    fn arrondir(mut self, prec: usize) -> Self {
        let n = self.nb_chiffres();
        if n <= prec {
            return self;
        }

        let drop = n - prec;
        let div = pow_big(10, drop);
        let moitie = &div / BigInt::from(2);

        let mut q = &self.coef / &div;
        let reste = &self.coef % &div;
        let impair = (&q % BigInt::from(2)).is_one();
        if reste > moitie || (reste == moitie && impair) {
            q += BigInt::one();
        }

        self.coef = q;
        self.exp += drop as i64;

        // retenue : 999.. -> 1000.. (un chiffre de trop, divisible par 10)
        if self.nb_chiffres() > prec {
            self.coef /= BigInt::from(10);
            self.exp += 1;
        }
        self
    }

    /// Retire les zéros finaux (0 reste 0 avec exposant 0).
    fn normaliser(mut self) -> Self {
        if self.coef.is_zero() {
            self.exp = 0;
            return self;
        }
        let dix = BigInt::from(10);
        while (&self.coef % &dix).is_zero() {
            self.coef /= &dix;
            self.exp += 1;
        }
        self
    }

    fn en_texte(&self) -> String {
        let chiffres = self.coef.to_str_radix(10);
        let n = chiffres.len() as i64;
        let ajuste = self.exp + n - 1;
        let signe = if self.neg { "-" } else { "" };

        // notation simple
        if self.exp <= 0 && ajuste >= SEUIL_SCIENTIFIQUE {
            if self.exp == 0 {
                return format!("{signe}{chiffres}");
            }
            let apres = (-self.exp) as usize;
            if chiffres.len() > apres {
                let (ent, frac) = chiffres.split_at(chiffres.len() - apres);
                return format!("{signe}{ent}.{frac}");
            }
            let zeros = "0".repeat(apres - chiffres.len());
            return format!("{signe}0.{zeros}{chiffres}");
        }

        // notation scientifique : d[.ddd]E±x
        let (tete, queue) = chiffres.split_at(1);
        let mantisse = if queue.is_empty() {
            tete.to_string()
        } else {
            format!("{tete}.{queue}")
        };
        format!("{signe}{mantisse}E{ajuste:+}")
    }
}

/// Lecture décimale normalisée d’un résultat.
///
/// Valeurs non finies : rendu brut ("inf", "NaN") ; le noyau ne les produit pas.
pub fn format_decimal(v: f64) -> String {
    match Decimal::depuis_f64(v) {
        Some(d) => d.arrondir(PRECISION).normaliser().en_texte(),
        None => format!("{v}"),
    }
}
