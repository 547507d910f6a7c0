//! Turns 401 responses from the session-protected scope into a redirect to
//! the sign-in page, whether the 401 comes from a handler or from a failed
//! claims extraction.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::{StatusCode, header};
use actix_web::{Error, HttpResponse};
use futures_util::future::LocalBoxFuture;

const SIGNIN_LOCATION: &str = "/auth/signin";

pub struct RedirectUnauthorized;

impl<S, B> Transform<S, ServiceRequest> for RedirectUnauthorized
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RedirectUnauthorizedMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RedirectUnauthorizedMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RedirectUnauthorizedMiddleware<S> {
    service: Rc<S>,
}

fn signin_redirect() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, SIGNIN_LOCATION))
        .finish()
}

impl<S, B> Service<ServiceRequest> for RedirectUnauthorizedMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let (http_req, payload) = req.into_parts();
        let req = ServiceRequest::from_parts(http_req.clone(), payload);

        Box::pin(async move {
            match service.call(req).await {
                Ok(res) if res.status() == StatusCode::UNAUTHORIZED => {
                    let (req, _) = res.into_parts();
                    Ok(ServiceResponse::new(
                        req,
                        signin_redirect().map_into_right_body(),
                    ))
                }
                Ok(res) => Ok(res.map_into_left_body()),
                Err(err)
                    if err.as_response_error().status_code() == StatusCode::UNAUTHORIZED =>
                {
                    Ok(ServiceResponse::new(
                        http_req,
                        signin_redirect().map_into_right_body(),
                    ))
                }
                Err(err) => Err(err),
            }
        })
    }
}
