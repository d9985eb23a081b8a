use crudgen_core::{ClassName, TypeName};

/// A statement in a method or constructor body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `var <name> = <init>;`
    Local { name: String, init: Expr },

    /// `<expr>;`
    Expr(Expr),
}

/// The subset of Java expressions generated code needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// String literal
    Str(String),

    /// Boolean literal
    Bool(bool),

    /// Local variable or parameter
    Name(String),

    /// `Owner::method`, `Owner::new` for constructor references
    MethodRef { owner: TypeName, method: String },

    /// Method invocation
    Call(Call),

    /// `(ty) expr`
    Cast { ty: TypeName, expr: Box<Expr> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// What the method is invoked on; `None` for an unqualified call
    pub target: Option<Target>,

    /// Explicit type arguments, `Type.<A, B>method(..)`
    pub type_args: Vec<TypeName>,

    pub method: String,

    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// Static invocation on a class
    Type(ClassName),

    /// Invocation on the value of an expression
    Expr(Box<Expr>),
}

impl Expr {
    pub fn str(value: impl Into<String>) -> Expr {
        Expr::Str(value.into())
    }

    pub fn name(name: impl Into<String>) -> Expr {
        Expr::Name(name.into())
    }

    pub fn method_ref(owner: impl Into<TypeName>, method: impl Into<String>) -> Expr {
        Expr::MethodRef {
            owner: owner.into(),
            method: method.into(),
        }
    }

    pub fn cast(ty: TypeName, expr: Expr) -> Expr {
        Expr::Cast {
            ty,
            expr: Box::new(expr),
        }
    }

    /// An unqualified call, `method(args..)`.
    pub fn call(method: impl Into<String>, args: Vec<Expr>) -> Expr {
        Expr::Call(Call {
            target: None,
            type_args: vec![],
            method: method.into(),
            args,
        })
    }

    /// A static call on `ty`, `Ty.<type_args>method(args..)`.
    pub fn static_call(
        ty: ClassName,
        type_args: Vec<TypeName>,
        method: impl Into<String>,
        args: Vec<Expr>,
    ) -> Expr {
        Expr::Call(Call {
            target: Some(Target::Type(ty)),
            type_args,
            method: method.into(),
            args,
        })
    }

    /// Invokes `method` on the value of `self`.
    pub fn chain(self, method: impl Into<String>, args: Vec<Expr>) -> Expr {
        Expr::Call(Call {
            target: Some(Target::Expr(Box::new(self))),
            type_args: vec![],
            method: method.into(),
            args,
        })
    }

    /// The calls of a method chain, first invoked first.
    ///
    /// `a.b().c()` yields `[b, c]`. Any expression that is not a call yields
    /// an empty list.
    pub fn call_chain(&self) -> Vec<&Call> {
        let mut calls = vec![];
        let mut expr = self;

        while let Expr::Call(call) = expr {
            calls.push(call);

            match &call.target {
                Some(Target::Expr(receiver)) => expr = &**receiver,
                _ => break,
            }
        }

        calls.reverse();
        calls
    }

    pub fn as_call(&self) -> Option<&Call> {
        match self {
            Expr::Call(call) => Some(call),
            _ => None,
        }
    }

    /// Calls `f` on every class this expression mentions.
    pub fn visit_class_names(&self, f: &mut impl FnMut(&ClassName)) {
        match self {
            Expr::Str(_) | Expr::Bool(_) | Expr::Name(_) => {}
            Expr::MethodRef { owner, .. } => owner.visit_class_names(f),
            Expr::Call(call) => {
                match &call.target {
                    Some(Target::Type(ty)) => f(ty),
                    Some(Target::Expr(receiver)) => receiver.visit_class_names(f),
                    None => {}
                }

                for ty in &call.type_args {
                    ty.visit_class_names(f);
                }

                for arg in &call.args {
                    arg.visit_class_names(f);
                }
            }
            Expr::Cast { ty, expr } => {
                ty.visit_class_names(f);
                expr.visit_class_names(f);
            }
        }
    }
}

impl Stmt {
    pub fn expr(&self) -> &Expr {
        match self {
            Stmt::Local { init, .. } => init,
            Stmt::Expr(expr) => expr,
        }
    }
}
