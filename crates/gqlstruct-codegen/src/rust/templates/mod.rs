pub mod struct_tmpl;
