//! Constant table and compile-time type checks.

use super::{GoEmitter, naming};
use crate::backend::go_writer::GoWriter;
use crate::ir::Dubbogo;

const PROCEDURE_DOC: &str = "\
These constants are the fully-qualified names of the RPCs defined in this package. They are
exposed at runtime as procedures and as the final two segments of the HTTP route.

They differ from the fully-qualified method names of protobuf reflection: drop the leading
slash and turn the remaining slash into a period to convert one into the other.";

impl GoEmitter<'_> {
    /// `<S>Name` and `<S><M>Procedure` for every service, in IR order.
    pub(super) fn emit_constants(&self, ir: &Dubbogo, w: &mut GoWriter) {
        w.group("const", |w| {
            for (i, service) in ir.services.iter().enumerate() {
                if i > 0 {
                    w.blank_line();
                }
                let name = naming::service_name_const(service);
                w.comment(&format!(
                    "{name} is the fully-qualified name of the {} service.",
                    service.service_name
                ));
                w.linef(format_args!("{name} = \"{}\"", service.interface_name));
                if service.methods.is_empty() {
                    continue;
                }
                w.blank_line();
                w.comment_lines(PROCEDURE_DOC);
                for method in &service.methods {
                    let constant = naming::procedure_const(service, method);
                    w.comment(&format!(
                        "{constant} is the fully-qualified name of the {}'s {} RPC.",
                        service.service_name, method.method_name
                    ));
                    w.linef(format_args!("{constant} = \"{}\"", naming::procedure_path(service, method)));
                }
            }
        });
        w.blank_line();
    }

    /// `_ <S> = (*<S>Impl)(nil)` per service.
    pub(super) fn emit_type_check(&self, ir: &Dubbogo, w: &mut GoWriter) {
        w.group("var", |w| {
            for service in &ir.services {
                w.linef(format_args!(
                    "_ {} = (*{})(nil)",
                    service.service_name,
                    naming::impl_type(service)
                ));
            }
        });
        w.blank_line();
    }
}
