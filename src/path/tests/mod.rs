use super::*;
use crate::grid::GridLayout;

mod helpers;

use helpers::*;
