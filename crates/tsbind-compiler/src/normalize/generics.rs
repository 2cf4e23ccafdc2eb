//! Type-parameter substitution.

use std::collections::HashMap;

use tsbind_core::{FunctionType, Parameter, Property, Type, TypeLiteral};

/// Type parameter name → concrete argument.
pub(crate) type Bindings = HashMap<String, Type>;

/// Pair declared type parameters with the arguments of an instantiation.
///
/// Arguments are first resolved against `outer`, so bindings compose along
/// `extends` chains. Missing arguments leave the parameter unbound.
pub(crate) fn bind(params: &[String], args: &[Type], outer: &Bindings) -> Bindings {
    params
        .iter()
        .zip(args)
        .map(|(param, arg)| (param.clone(), substitute(arg, outer)))
        .collect()
}

pub(crate) fn substitute(ty: &Type, bindings: &Bindings) -> Type {
    if bindings.is_empty() {
        return ty.clone();
    }
    match ty {
        Type::Named(named) => {
            if named.type_args.is_empty()
                && let Some(bound) = bindings.get(&named.name)
            {
                return match bound {
                    Type::Named(bound) if named.is_array => {
                        let mut bound = bound.clone();
                        bound.is_array = true;
                        Type::Named(bound)
                    }
                    _ => bound.clone(),
                };
            }
            let mut named = named.clone();
            named.type_args = named
                .type_args
                .iter()
                .map(|arg| substitute(arg, bindings))
                .collect();
            Type::Named(named)
        }
        Type::Function(function) => Type::Function(FunctionType {
            return_type: Box::new(substitute(&function.return_type, bindings)),
            parameters: substitute_params(&function.parameters, bindings),
        }),
        Type::Literal(literal) => Type::Literal(TypeLiteral {
            properties: literal
                .properties
                .iter()
                .map(|p| substitute_property(p, bindings))
                .collect(),
            call_signatures: literal
                .call_signatures
                .iter()
                .map(|sig| FunctionType {
                    return_type: Box::new(substitute(&sig.return_type, bindings)),
                    parameters: substitute_params(&sig.parameters, bindings),
                })
                .collect(),
        }),
    }
}

pub(crate) fn substitute_params(params: &[Parameter], bindings: &Bindings) -> Vec<Parameter> {
    params
        .iter()
        .map(|p| Parameter {
            ty: substitute(&p.ty, bindings),
            ..p.clone()
        })
        .collect()
}

pub(crate) fn substitute_property(property: &Property, bindings: &Bindings) -> Property {
    Property {
        ty: substitute(&property.ty, bindings),
        ..property.clone()
    }
}
