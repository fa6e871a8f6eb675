use genco::Tokens;

use crate::functions::Scalar;
use crate::proto::format::ProtoFormatTypeFunc;
use crate::registry::{Service, ServiceMethod};

use super::render_block;

const EMPTY_REQUEST: &str = "google.protobuf.Empty";

pub fn render_service(service: &Service) -> Tokens {
    let methods = service
        .sorted_methods()
        .into_iter()
        .map(rpc_line)
        .collect::<Vec<_>>();

    render_block("service", &service.name, methods)
}

pub fn rpc_line(method: &ServiceMethod) -> String {
    let request = method.request.as_deref().unwrap_or(EMPTY_REQUEST);

    // Scalar responses need a message type on the wire.
    let response = match Scalar::from_name(&method.response) {
        Some(scalar) => ProtoFormatTypeFunc::wrapper(scalar),
        None => method.response.as_str(),
    };

    format!("rpc {}({}) returns ({});", method.name, request, response)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::registry::ServiceMethod;

    use super::rpc_line;

    fn method(response: &str, request: Option<&str>) -> ServiceMethod {
        ServiceMethod {
            name: "ReadFoo".into(),
            request: request.map(str::to_string),
            response: response.into(),
        }
    }

    #[test]
    fn empty_request_uses_empty_message() {
        assert_eq!(
            rpc_line(&method("Foo", None)),
            "rpc ReadFoo(google.protobuf.Empty) returns (Foo);"
        );
    }

    #[test]
    fn explicit_request_is_used() {
        assert_eq!(
            rpc_line(&method("Foo", Some("ReadFooRequest"))),
            "rpc ReadFoo(ReadFooRequest) returns (Foo);"
        );
    }

    #[test]
    fn scalar_response_is_wrapped() {
        assert_eq!(
            rpc_line(&method("Boolean", None)),
            "rpc ReadFoo(google.protobuf.Empty) returns (google.protobuf.BoolValue);"
        );
    }
}
