//! Spanish messages

pub(super) const CODE: &str = "es";

pub(super) const MESSAGES: &[(&str, &str)] = &[
    ("between", "{{title}} debe estar entre \"{{min}}\" y \"{{max}}\""),
    ("not_between", "{{title}} no puede ser un valor entre \"{{min}}\" y \"{{max}}\""),
    ("blank", "{{title}} debe estar en blanco"),
    ("not_blank", "{{title}} no puede estar en blanco"),
    ("empty", "{{title}} debe estar vacío"),
    ("not_empty", "{{title}} no puede estar vacío"),
    ("equal_to", "{{title}} debe ser igual a \"{{value}}\""),
    ("not_equal_to", "{{title}} no puede ser igual a \"{{value}}\""),
    ("false", "{{title}} debe ser falso"),
    ("not_false", "{{title}} no debe ser falso"),
    ("greater_or_equal_to", "{{title}} debe ser mayor o igual a \"{{value}}\""),
    ("not_greater_or_equal_to", "{{title}} no puede ser mayor o igual a \"{{value}}\""),
    ("greater_than", "{{title}} debe ser mayor que \"{{value}}\""),
    ("not_greater_than", "{{title}} no puede ser mayor que \"{{value}}\""),
    ("in_slice", "{{title}} no es válido"),
    ("not_in_slice", "{{title}} no es válido"),
    ("length", "{{title}} debe tener una longitud igual a \"{{length}}\""),
    ("not_length", "{{title}} no puede tener una longitud igual a \"{{length}}\""),
    ("length_between", "{{title}} debe tener una longitud entre \"{{min}}\" y \"{{max}}\""),
    ("not_length_between", "{{title}} no puede tener una longitud entre \"{{min}}\" y \"{{max}}\""),
    ("less_or_equal_to", "{{title}} debe ser menor o igual a \"{{value}}\""),
    ("not_less_or_equal_to", "{{title}} no puede ser menor o igual a \"{{value}}\""),
    ("less_than", "{{title}} debe ser menor que \"{{value}}\""),
    ("not_less_than", "{{title}} no puede ser menor que \"{{value}}\""),
    ("matching_to", "{{title}} debe coincidir con \"{{regexp}}\""),
    ("not_matching_to", "{{title}} no puede coincidir con \"{{regexp}}\""),
    ("max_length", "{{title}} no debe tener una longitud mayor a \"{{length}}\""),
    ("not_max_length", "{{title}} debe tener una longitud mayor a \"{{length}}\""),
    ("min_length", "{{title}} no debe tener una longitud menor a \"{{length}}\""),
    ("not_min_length", "{{title}} debe tener una longitud menor a \"{{length}}\""),
    ("nil", "{{title}} debe ser nulo"),
    ("not_nil", "{{title}} no debe ser nulo"),
    ("passing", "{{title}} no es válido"),
    ("not_passing", "{{title}} no es válido"),
    ("true", "{{title}} debe ser verdadero"),
    ("not_true", "{{title}} no debe ser verdadero"),
    ("zero", "{{title}} debe ser cero"),
    ("not_zero", "{{title}} no debe ser cero"),
];
