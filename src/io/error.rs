// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadTsysError {
    #[error("Measured system temperature file '{0}' does not exist")]
    DoesNotExist(PathBuf),

    #[error("Measured system temperature file '{0}' has no usable lines; expected 'frequency_GHz log10(Tsys)' pairs")]
    NoSamples(PathBuf),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
