//! Tree-walking evaluator (§4.5).
//!
//! Expressions evaluate to a [`Value`]; statements execute for effect
//! through an [`Interpreter`], which owns the [`Environment`] and the
//! buffered writer `print` targets.

use std::io::Write;

use interp_par::{BinOp, Expr, ExprKind, Stmt, StmtKind, UnOp};

use crate::env::Environment;
use crate::error::{EvalError, ExecError};
use crate::value::Value;

pub struct Interpreter<W: Write> {
    env: Environment,
    out: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Self { env: Environment::new(), out }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    pub fn exec(&mut self, stmt: &Stmt) -> Result<(), ExecError> {
        match &stmt.kind {
            StmtKind::Print(e) => {
                match eval(&self.env, e)? {
                    Value::Int(n) => write!(self.out, "{n}")?,
                    Value::Seq(s) => {
                        let bytes: Vec<u8> = s.borrow().iter().map(|&n| n as u8).collect();
                        self.out.write_all(&bytes)?;
                    }
                }
                Ok(())
            }
            StmtKind::Compound(stmts) => {
                for s in stmts {
                    self.exec(s)?;
                }
                Ok(())
            }
            StmtKind::If(cond, body) => {
                let truthy = eval(&self.env, cond)?
                    .is_truthy()
                    .ok_or(EvalError::TypeMismatch)?;
                if truthy {
                    self.exec(body)?;
                }
                Ok(())
            }
            StmtKind::While(cond, body) => {
                loop {
                    let truthy = eval(&self.env, cond)?
                        .is_truthy()
                        .ok_or(EvalError::TypeMismatch)?;
                    if !truthy {
                        break;
                    }
                    self.exec(body)?;
                }
                Ok(())
            }
            StmtKind::Push(sexpr, vexpr) => {
                let seq = eval(&self.env, sexpr)?;
                let seq = seq.as_seq().ok_or(EvalError::TypeMismatch)?.clone();
                let value = eval(&self.env, vexpr)?
                    .as_int()
                    .ok_or(EvalError::TypeMismatch)?;
                seq.borrow_mut().push(value);
                Ok(())
            }
            StmtKind::Assign { name, index: None, rhs } => {
                let value = eval(&self.env, rhs)?;
                self.env.set(name, value);
                Ok(())
            }
            StmtKind::Assign { name, index: Some(idx), rhs } => {
                let value = eval(&self.env, rhs)?
                    .as_int()
                    .ok_or(EvalError::TypeMismatch)?;
                let index = eval(&self.env, idx)?
                    .as_int()
                    .ok_or(EvalError::TypeMismatch)?;
                let target = self.env.get(name);
                let target = target.as_seq().ok_or(EvalError::TypeMismatch)?;
                let mut slots = target.borrow_mut();
                let slot = usize::try_from(index)
                    .ok()
                    .and_then(|i| slots.get_mut(i))
                    .ok_or(EvalError::IndexOutOfBounds)?;
                *slot = value;
                Ok(())
            }
        }
    }
}

fn eval(env: &Environment, expr: &Expr) -> Result<Value, EvalError> {
    match &expr.kind {
        ExprKind::LitInt(n) => Ok(Value::Int(*n)),
        ExprKind::Var(name) => Ok(env.get(name)),
        ExprKind::SeqInit(elems) if elems.is_empty() => Ok(Value::empty_seq()),
        ExprKind::SeqInit(elems) => {
            let mut out = Vec::with_capacity(elems.len());
            for e in elems {
                out.push(eval(env, e)?.as_int().ok_or(EvalError::TypeMismatch)?);
            }
            Ok(Value::new_seq(out))
        }
        ExprKind::Unary(UnOp::Len, e) => {
            let v = eval(env, e)?;
            let s = v.as_seq().ok_or(EvalError::TypeMismatch)?;
            Ok(Value::Int(s.borrow().len() as i64))
        }
        ExprKind::Binary(op, lhs, rhs) => eval_binary(env, *op, lhs, rhs),
    }
}

fn eval_binary(env: &Environment, op: BinOp, lhs: &Expr, rhs: &Expr) -> Result<Value, EvalError> {
    match op {
        BinOp::And => {
            let l = eval(env, lhs)?.as_int().ok_or(EvalError::TypeMismatch)?;
            if l == 0 {
                return Ok(Value::Int(0));
            }
            let r = eval(env, rhs)?.as_int().ok_or(EvalError::TypeMismatch)?;
            return Ok(Value::Int(r));
        }
        BinOp::Or => {
            let l = eval(env, lhs)?.as_int().ok_or(EvalError::TypeMismatch)?;
            if l != 0 {
                return Ok(Value::Int(l));
            }
            let r = eval(env, rhs)?.as_int().ok_or(EvalError::TypeMismatch)?;
            return Ok(Value::Int(r));
        }
        _ => {}
    }

    let l = eval(env, lhs)?;
    let r = eval(env, rhs)?;

    match op {
        BinOp::Add => add(l, r),
        BinOp::Sub => {
            let (a, b) = both_int(l, r)?;
            Ok(Value::Int(a - b))
        }
        BinOp::Mul => mul(l, r),
        BinOp::Div => {
            let (a, b) = both_int(l, r)?;
            if b == 0 {
                Err(EvalError::DivideByZero)
            } else {
                Ok(Value::Int(a / b))
            }
        }
        BinOp::Less => less(l, r),
        BinOp::Equals => Ok(Value::Int(equals(&l, &r) as i64)),
        BinOp::Index => index(l, r),
        BinOp::And | BinOp::Or => unreachable!("handled above with short-circuiting"),
    }
}

fn both_int(l: Value, r: Value) -> Result<(i64, i64), EvalError> {
    match (l.as_int(), r.as_int()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(EvalError::TypeMismatch),
    }
}

fn add(l: Value, r: Value) -> Result<Value, EvalError> {
    match (&l, &r) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a + b)),
        (Value::Seq(a), Value::Seq(b)) => {
            let a = a.borrow();
            let b = b.borrow();
            let mut out = Vec::with_capacity(a.len() + b.len());
            out.extend_from_slice(&a);
            out.extend_from_slice(&b);
            Ok(Value::new_seq(out))
        }
        (Value::Seq(a), Value::Int(b)) => {
            let a = a.borrow();
            let mut out = Vec::with_capacity(a.len() + 1);
            out.extend_from_slice(&a);
            out.push(*b);
            Ok(Value::new_seq(out))
        }
        (Value::Int(a), Value::Seq(b)) => {
            let b = b.borrow();
            let mut out = Vec::with_capacity(b.len() + 1);
            out.push(*a);
            out.extend_from_slice(&b);
            Ok(Value::new_seq(out))
        }
    }
}

fn mul(l: Value, r: Value) -> Result<Value, EvalError> {
    match (&l, &r) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a * b)),
        (Value::Seq(s), Value::Int(n)) | (Value::Int(n), Value::Seq(s)) => {
            let s = s.borrow();
            let n = (*n).max(0) as usize;
            let mut out = Vec::with_capacity(s.len() * n);
            for _ in 0..n {
                out.extend_from_slice(&s);
            }
            Ok(Value::new_seq(out))
        }
        (Value::Seq(_), Value::Seq(_)) => Err(EvalError::TypeMismatch),
    }
}

fn less(l: Value, r: Value) -> Result<Value, EvalError> {
    match (&l, &r) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int((a < b) as i64)),
        (Value::Seq(a), Value::Seq(b)) => {
            let a = a.borrow();
            let b = b.borrow();
            for (x, y) in a.iter().zip(b.iter()) {
                if x != y {
                    return Ok(Value::Int((x < y) as i64));
                }
            }
            Ok(Value::Int((a.len() < b.len()) as i64))
        }
        _ => Err(EvalError::TypeMismatch),
    }
}

fn equals(l: &Value, r: &Value) -> bool {
    match (l, r) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Seq(a), Value::Seq(b)) => *a.borrow() == *b.borrow(),
        _ => false,
    }
}

fn index(l: Value, r: Value) -> Result<Value, EvalError> {
    let seq = l.as_seq().ok_or(EvalError::TypeMismatch)?;
    let idx = r.as_int().ok_or(EvalError::TypeMismatch)?;
    let slots = seq.borrow();
    usize::try_from(idx)
        .ok()
        .and_then(|i| slots.get(i))
        .copied()
        .map(Value::Int)
        .ok_or(EvalError::IndexOutOfBounds)
}
