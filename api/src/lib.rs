pub mod contact;
pub mod content;
pub mod validate;

pub use contact::*;
pub use content::*;

// url prefix for every json endpoint served by the portfolio server
//
// the webapp and the server both refer to this, so the routes cannot drift apart
pub const API_ROOT: &str = "/api";

// client-side endpoint generator
//
// every endpoint is a POST of a FooReq to /api/Foo, answered by a FooResp.  a non-2xx status
// carries the server's explanation in the body, which is surfaced as the error message so that
// callers can try to decode structured errors (see contact.rs)
#[macro_export]
macro_rules! endpoint {
    ($name:ident) => {
        paste::paste! {
            pub async fn [<$name:snake>](req: &[<$name:camel Req>]) -> anyhow::Result<[<$name:camel Resp>]> {
                let resp = gloo_net::http::Request::post(
                    format!("{}/{}", $crate::API_ROOT, stringify!([<$name:camel>])).as_str(),
                )
                .json(&req.clone())?
                .send()
                .await?;

                if resp.ok() {
                    Ok(resp.json().await?)
                } else {
                    Err(anyhow::Error::msg(resp.text().await?))
                }
            }
        }
    };
}

// the server needs the route string without going through the client machinery
pub fn endpoint_path(name: &str) -> String {
    format!("{API_ROOT}/{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths_live_under_api_root() {
        assert_eq!(endpoint_path("GetContent"), "/api/GetContent");
        assert_eq!(endpoint_path("SendContact"), "/api/SendContact");
    }
}
