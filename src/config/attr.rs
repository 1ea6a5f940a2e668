use super::Opts;
use crate::event::EventSpec;
use crate::ffi::{bindings as b, Attr};

/// Attr for the group leader: starts disabled and reads the whole group at once.
pub(crate) fn leader(spec: &EventSpec, opts: &Opts) -> Attr {
    let mut attr = from(spec, opts);
    attr.read_format = b::PERF_FORMAT_GROUP as _;
    attr.set_disabled(1);
    attr
}

/// Attr for a group member, which starts and stops together with its leader.
pub(crate) fn sibling(spec: &EventSpec, opts: &Opts) -> Attr {
    let mut attr = from(spec, opts);
    attr.set_disabled(0);
    attr
}

fn from(spec: &EventSpec, opts: &Opts) -> Attr {
    let mut attr = Attr {
        size: size_of::<Attr>() as _,
        ..Default::default()
    };

    attr.type_ = spec.domain.as_type();
    attr.config = spec.code;

    macro_rules! when {
        ($bool:ident, $then:ident) => {
            if opts.exclude.$bool {
                attr.$then(1);
            }
        };
    }
    when!(user, set_exclude_user);
    when!(kernel, set_exclude_kernel);
    when!(hv, set_exclude_hv);
    when!(idle, set_exclude_idle);

    attr
}
