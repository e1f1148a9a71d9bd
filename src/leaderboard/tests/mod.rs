
use crate::matrix::{
    Api, ApiVersion, Driver, DriverId, Extension, Matrix, Status, SubExtension, Vendor,
};

pub(crate) fn driver(name: &str) -> DriverId {
    DriverId::driver(name)
}

pub(crate) fn ext(name: &str, status: Status, drivers: &[&str]) -> Extension {
    Extension {
        name: name.into(),
        status,
        supported_drivers: drivers.iter().map(|d| d.to_string()).collect(),
        subextensions: Vec::new(),
    }
}

pub(crate) fn sub(name: &str, status: Status, drivers: &[&str]) -> SubExtension {
    SubExtension {
        name: name.into(),
        status,
        supported_drivers: drivers.iter().map(|d| d.to_string()).collect(),
    }
}

pub(crate) fn with_subs(mut extension: Extension, subs: Vec<SubExtension>) -> Extension {
    extension.subextensions = subs;
    extension
}

pub(crate) fn version(api_name: &str, version: &str, extensions: Vec<Extension>) -> ApiVersion {
    ApiVersion {
        name: api_name.into(),
        version: version.parse().unwrap(),
        extensions,
    }
}

pub(crate) fn vendor(name: &str, drivers: &[&str]) -> Vendor {
    Vendor {
        name: name.into(),
        drivers: drivers
            .iter()
            .map(|d| Driver {
                name: d.to_string(),
            })
            .collect(),
    }
}

pub(crate) fn api(name: &str, versions: Vec<ApiVersion>, vendors: Vec<Vendor>) -> Api {
    Api {
        name: name.into(),
        versions,
        vendors,
    }
}

pub(crate) fn matrix(apis: Vec<Api>) -> Matrix {
    Matrix { apis }
}
