use super::{Comma, Formatter, JavaStr, ToJava};
use crate::java::{Call, Expr, Stmt, Target};

impl ToJava for &Stmt {
    fn to_java(self, f: &mut Formatter<'_>) {
        f.indent();

        match self {
            Stmt::Local { name, init } => fmt!(f, "var " name " = " init ";"),
            Stmt::Expr(expr) => fmt!(f, expr ";"),
        }

        f.newline();
    }
}

impl ToJava for &Expr {
    fn to_java(self, f: &mut Formatter<'_>) {
        match self {
            Expr::Str(value) => JavaStr(value).to_java(f),
            Expr::Bool(value) => value.to_java(f),
            Expr::Name(name) => name.to_java(f),
            Expr::MethodRef { owner, method } => fmt!(f, owner "::" method),
            Expr::Call(call) => call.to_java(f),
            Expr::Cast { ty, expr } => {
                let expr: &Expr = expr;
                fmt!(f, "(" ty ") " expr);
            }
        }
    }
}

impl ToJava for &Call {
    fn to_java(self, f: &mut Formatter<'_>) {
        match &self.target {
            None => {}
            Some(Target::Type(ty)) => fmt!(f, ty "."),
            Some(Target::Expr(receiver)) => {
                let receiver: &Expr = receiver;
                receiver.to_java(f);

                // Each link of a call chain goes on its own line
                if matches!(receiver, Expr::Call(_)) {
                    f.continuation();
                }

                fmt!(f, ".");
            }
        }

        if !self.type_args.is_empty() {
            fmt!(f, "<" Comma(&self.type_args) ">");
        }

        let method = &self.method;
        fmt!(f, method "(" Comma(&self.args) ")");
    }
}
