//! The optimal-ate pairing `e: G1 × G2 → GT`.
//!
//! Miller loop over the non-adjacent form of `6u + 2` with two Frobenius
//! correction steps, followed by the hard-part exponentiation chain of
//! Devegili, Scott and Dahab ("Implementing cryptographic pairings over
//! Barreto-Naehrig curves").

use crate::constants::{
    SIX_U_PLUS_2_NAF, U, XI_TO_P_MINUS_1_OVER_2, XI_TO_P_MINUS_1_OVER_3,
    XI_TO_P_SQUARED_MINUS_1_OVER_3,
};
use crate::fp2::Fp2;
use crate::fp6::Fp6;
use crate::fp12::Fp12;
use crate::g1::G1;
use crate::g2::G2;
use crate::gt::Gt;
use num_bigint::BigUint;

/// A twist point in Jacobian coordinates with the cached `t = z²`.
struct TwistAcc {
    x: Fp2,
    y: Fp2,
    z: Fp2,
    t: Fp2,
}

/// An affine twist point used as the fixed addend of the Miller loop.
struct AffineTwist {
    x: Fp2,
    y: Fp2,
}

/// Tangent line at `r`, evaluated at the `G1` point `(qx, qy)`, while
/// doubling `r` in place. Returns the sparse coefficients `(a, b, c)`.
fn line_double(r: &TwistAcc, qx: &BigUint, qy: &BigUint) -> (Fp2, Fp2, Fp2, TwistAcc) {
    let a_sq = r.x.square();
    let b_sq = r.y.square();
    let c_sq = b_sq.square();

    let d = r.x.add(&b_sq).square().sub(&a_sq).sub(&c_sq).double();
    let e = a_sq.double().add(&a_sq);
    let g = e.square();

    let rx = g.sub(&d.double());
    let rz = r.y.add(&r.z).square().sub(&b_sq).sub(&r.t);
    let c8 = c_sq.double().double().double();
    let ry = d.sub(&rx).mul(&e).sub(&c8);
    let rt = rz.square();

    let t = e.mul(&r.t).double();
    let b = t.mul_scalar(qx).neg();
    let b4 = b_sq.double().double();
    let a = r.x.add(&e).square().sub(&a_sq).sub(&g).sub(&b4);
    let c = rz.mul(&r.t).double().mul_scalar(qy);

    (
        a,
        b,
        c,
        TwistAcc {
            x: rx,
            y: ry,
            z: rz,
            t: rt,
        },
    )
}

/// Chord line through `r` and `p`, evaluated at `(qx, qy)`, while adding
/// `p` into `r`. `r2` caches `p.y²`.
fn line_add(
    r: &TwistAcc,
    p: &AffineTwist,
    qx: &BigUint,
    qy: &BigUint,
    r2: &Fp2,
) -> (Fp2, Fp2, Fp2, TwistAcc) {
    let b = p.x.mul(&r.t);
    let d = p.y.add(&r.z).square().sub(r2).sub(&r.t).mul(&r.t);
    let h = b.sub(&r.x);
    let i = h.square();
    let e = i.double().double();
    let j = h.mul(&e);
    let l1 = d.sub(&r.y).sub(&r.y);
    let v = r.x.mul(&e);

    let rx = l1.square().sub(&j).sub(&v.double());
    let rz = r.z.add(&h).square().sub(&r.t).sub(&i);
    let t = v.sub(&rx).mul(&l1);
    let t2 = r.y.mul(&j).double();
    let ry = t.sub(&t2);
    let rt = rz.square();

    let t = p.y.add(&rz).square().sub(r2).sub(&rt);
    let t2 = l1.mul(&p.x).double();
    let a = t2.sub(&t);
    let c = rz.mul_scalar(qy).double();
    let b = l1.neg().mul_scalar(qx).double();

    (
        a,
        b,
        c,
        TwistAcc {
            x: rx,
            y: ry,
            z: rz,
            t: rt,
        },
    )
}

/// Multiplies `ret` by the sparse line element `a·ωτ + b·ω + c` using the
/// dedicated sparse-multiplication schedule.
fn mul_line(ret: &Fp12, a: &Fp2, b: &Fp2, c: &Fp2) -> Fp12 {
    let a2 = Fp6 {
        x: Fp2::zero(),
        y: a.clone(),
        z: b.clone(),
    }
    .mul(&ret.x);
    let t3 = ret.y.mul_fp2(c);

    let t = b.add(c);
    let t2 = Fp6 {
        x: Fp2::zero(),
        y: a.clone(),
        z: t,
    };
    let x = ret.x.add(&ret.y).mul(&t2).sub(&a2).sub(&t3);
    let y = t3.add(&a2.mul_tau());

    Fp12 { x, y }
}

fn miller(q: &G2, p: &G1) -> Fp12 {
    let mut ret = Fp12::one();
    if q.is_infinity() || p.is_infinity() {
        return ret;
    }

    let (qx, qy, _) = q.affine_coordinates();
    let (px, py, _) = p.affine_coordinates();
    let a_affine = AffineTwist {
        x: qx.clone(),
        y: qy.clone(),
    };
    let minus_a = AffineTwist {
        x: qx.clone(),
        y: qy.neg(),
    };

    let mut r = TwistAcc {
        x: qx.clone(),
        y: qy.clone(),
        z: Fp2::one(),
        t: Fp2::one(),
    };
    let r2 = qy.square();

    let n = SIX_U_PLUS_2_NAF.len();
    for i in (1..n).rev() {
        let (a, b, c, new_r) = line_double(&r, &px, &py);
        if i != n - 1 {
            ret = ret.square();
        }
        ret = mul_line(&ret, &a, &b, &c);
        r = new_r;

        let (a, b, c, new_r) = match SIX_U_PLUS_2_NAF[i - 1] {
            1 => line_add(&r, &a_affine, &px, &py, &r2),
            -1 => line_add(&r, &minus_a, &px, &py, &r2),
            _ => continue,
        };
        ret = mul_line(&ret, &a, &b, &c);
        r = new_r;
    }

    // Correction steps with Q1 = π(Q) and -Q2 = -π²(Q).
    let q1 = AffineTwist {
        x: qx.conjugate().mul(&XI_TO_P_MINUS_1_OVER_3),
        y: qy.conjugate().mul(&XI_TO_P_MINUS_1_OVER_2),
    };
    let minus_q2 = AffineTwist {
        x: qx.mul_scalar(&XI_TO_P_SQUARED_MINUS_1_OVER_3),
        y: qy,
    };

    let r2 = q1.y.square();
    let (a, b, c, new_r) = line_add(&r, &q1, &px, &py, &r2);
    ret = mul_line(&ret, &a, &b, &c);
    r = new_r;

    let r2 = minus_q2.y.square();
    let (a, b, c, _) = line_add(&r, &minus_q2, &px, &py, &r2);
    mul_line(&ret, &a, &b, &c)
}

fn final_exponentiation(inp: &Fp12) -> Fp12 {
    // Easy part: inp^((p⁶−1)(p²+1)). Inversion cannot fail because Miller
    // loop outputs are nonzero; the identity is returned on the impossible
    // branch rather than panicking.
    let inv = match inp.invert() {
        Ok(v) => v,
        Err(_) => return Fp12::one(),
    };
    let t1 = inp.conjugate().mul(&inv);
    let t1 = t1.mul(&t1.frobenius_p2());

    // Hard part, the Devegili-Scott-Dahab addition chain.
    let fp = t1.frobenius();
    let fp2 = t1.frobenius_p2();
    let fp3 = fp2.frobenius();

    let fu = t1.exp(&U);
    let fu2 = fu.exp(&U);
    let fu3 = fu2.exp(&U);

    let y3 = fu.frobenius().conjugate();
    let fu2p = fu2.frobenius();
    let fu3p = fu3.frobenius();
    let y2 = fu2.frobenius_p2();

    let y0 = fp.mul(&fp2).mul(&fp3);
    let y1 = t1.conjugate();
    let y5 = fu2.conjugate();
    let y4 = fu.mul(&fu2p).conjugate();
    let y6 = fu3.mul(&fu3p).conjugate();

    let t0 = y6.square().mul(&y4).mul(&y5);
    let t1 = y3.mul(&y5).mul(&t0);
    let t0 = t0.mul(&y2);
    let t1 = t1.square().mul(&t0).square();
    let t0 = t1.mul(&y1);
    let t1 = t1.mul(&y0);
    t0.square().mul(&t1)
}

/// The optimal-ate pairing. Bilinear and non-degenerate; either argument
/// at infinity maps to the identity of `GT`.
pub fn pairing(p: &G1, q: &G2) -> Gt {
    Gt(final_exponentiation(&miller(q, p)))
}
