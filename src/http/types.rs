use actix_web::HttpResponse;
use crate::common::common::QueryMap;

pub type HttpServiceQueryHashingMapOk = QueryMap;
pub type HttpServiceQueryHashingMapErr = HttpResponse;
