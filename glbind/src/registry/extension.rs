macro_rules! extensions {
    ($($variant:ident,)*) => {
        /// Vendor extensions the loader probes for. The advertised name is
        /// the variant name prefixed with `GL_`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(non_camel_case_types)]
        pub enum Extension {
            $($variant,)*
        }

        impl Extension {
            pub const ALL: &'static [Extension] = &[$(Extension::$variant,)*];
            pub const COUNT: usize = Extension::ALL.len();

            /// Name as advertised by the driver, `GL_ARB_multitexture`.
            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Extension::$variant => concat!("GL_", stringify!($variant)),)*
                }
            }
        }
    };
}

extensions! {
    AMD_conservative_depth,
    AMD_debug_output,
    AMD_draw_buffers_blend,
    AMD_multi_draw_indirect,
    AMD_pinned_memory,
    AMD_query_buffer_object,
    AMD_seamless_cubemap_per_texture,
    AMD_shader_trinary_minmax,
    AMD_vertex_shader_layer,
    APPLE_client_storage,
    APPLE_flush_buffer_range,
    APPLE_rgb_422,
    APPLE_row_bytes,
    APPLE_texture_range,
    APPLE_vertex_array_object,
    APPLE_ycbcr_422,
    ARB_ES2_compatibility,
    ARB_base_instance,
    ARB_blend_func_extended,
    ARB_buffer_storage,
    ARB_clear_texture,
    ARB_clip_control,
    ARB_color_buffer_float,
    ARB_compatibility,
    ARB_compute_shader,
    ARB_conservative_depth,
    ARB_copy_image,
    ARB_debug_output,
    ARB_depth_buffer_float,
    ARB_depth_clamp,
    ARB_depth_texture,
    ARB_direct_state_access,
    ARB_draw_buffers,
    ARB_draw_buffers_blend,
    ARB_draw_elements_base_vertex,
    ARB_draw_indirect,
    ARB_draw_instanced,
    ARB_enhanced_layouts,
    ARB_explicit_attrib_location,
    ARB_explicit_uniform_location,
    ARB_fragment_coord_conventions,
    ARB_fragment_program,
    ARB_fragment_shader,
    ARB_framebuffer_object,
    ARB_framebuffer_sRGB,
    ARB_geometry_shader4,
    ARB_get_program_binary,
    ARB_gl_spirv,
    ARB_gpu_shader5,
    ARB_gpu_shader_fp64,
    ARB_half_float_pixel,
    ARB_half_float_vertex,
    ARB_imaging,
    ARB_indirect_parameters,
    ARB_instanced_arrays,
    ARB_map_buffer_range,
    ARB_multi_bind,
    ARB_multi_draw_indirect,
    ARB_multisample,
    ARB_multitexture,
    ARB_occlusion_query,
    ARB_parallel_shader_compile,
    ARB_pixel_buffer_object,
    ARB_point_parameters,
    ARB_polygon_offset_clamp,
    ARB_provoking_vertex,
    ARB_robust_buffer_access_behavior,
    ARB_robustness,
    ARB_sample_shading,
    ARB_sampler_objects,
    ARB_seamless_cube_map,
    ARB_shader_bit_encoding,
    ARB_shader_draw_parameters,
    ARB_shader_image_load_store,
    ARB_shader_objects,
    ARB_shader_storage_buffer_object,
    ARB_shading_language_100,
    ARB_shading_language_420pack,
    ARB_shadow,
    ARB_spirv_extensions,
    ARB_stencil_texturing,
    ARB_sync,
    ARB_tessellation_shader,
    ARB_texture_barrier,
    ARB_texture_border_clamp,
    ARB_texture_buffer_object,
    ARB_texture_compression,
    ARB_texture_compression_bptc,
    ARB_texture_compression_rgtc,
    ARB_texture_cube_map,
    ARB_texture_cube_map_array,
    ARB_texture_float,
    ARB_texture_mirrored_repeat,
    ARB_texture_non_power_of_two,
    ARB_texture_query_levels,
    ARB_texture_rectangle,
    ARB_texture_rg,
    ARB_texture_storage,
    ARB_texture_swizzle,
    ARB_timer_query,
    ARB_uniform_buffer_object,
    ARB_vertex_array_object,
    ARB_vertex_buffer_object,
    ARB_vertex_program,
    ARB_vertex_shader,
    ARB_vertex_type_2_10_10_10_rev,
    ATI_draw_buffers,
    ATI_fragment_shader,
    ATI_meminfo,
    ATI_separate_stencil,
    ATI_texture_float,
    ATI_texture_mirror_once,
    EXT_abgr,
    EXT_bgra,
    EXT_blend_color,
    EXT_blend_equation_separate,
    EXT_blend_func_separate,
    EXT_blend_minmax,
    EXT_debug_label,
    EXT_debug_marker,
    EXT_direct_state_access,
    EXT_draw_instanced,
    EXT_draw_range_elements,
    EXT_fog_coord,
    EXT_framebuffer_blit,
    EXT_framebuffer_multisample,
    EXT_framebuffer_object,
    EXT_framebuffer_sRGB,
    EXT_geometry_shader4,
    EXT_gpu_shader4,
    EXT_multi_draw_arrays,
    EXT_packed_depth_stencil,
    EXT_packed_float,
    EXT_point_parameters,
    EXT_polygon_offset_clamp,
    EXT_provoking_vertex,
    EXT_rescale_normal,
    EXT_secondary_color,
    EXT_separate_specular_color,
    EXT_shader_image_load_store,
    EXT_texture3D,
    EXT_texture_array,
    EXT_texture_buffer_object,
    EXT_texture_compression_s3tc,
    EXT_texture_edge_clamp,
    EXT_texture_filter_anisotropic,
    EXT_texture_integer,
    EXT_texture_lod_bias,
    EXT_texture_object,
    EXT_texture_sRGB,
    EXT_texture_shared_exponent,
    EXT_texture_storage,
    EXT_texture_swizzle,
    EXT_timer_query,
    EXT_transform_feedback,
    EXT_vertex_array,
    INGR_blend_func_separate,
    INGR_color_clamp,
    INGR_interlace_read,
    KHR_blend_equation_advanced,
    KHR_context_flush_control,
    KHR_debug,
    KHR_no_error,
    KHR_parallel_shader_compile,
    KHR_robustness,
    KHR_texture_compression_astc_ldr,
    NV_blend_equation_advanced,
    NV_blend_square,
    NV_conditional_render,
    NV_copy_image,
    NV_depth_buffer_float,
    NV_explicit_multisample,
    NV_fence,
    NV_fog_distance,
    NV_fragment_program,
    NV_geometry_program4,
    NV_half_float,
    NV_light_max_exponent,
    NV_multisample_filter_hint,
    NV_occlusion_query,
    NV_packed_depth_stencil,
    NV_primitive_restart,
    NV_shader_buffer_load,
    NV_texture_barrier,
    NV_texture_rectangle,
    NV_transform_feedback,
    NV_vertex_program,
    NV_vertex_program2,
    NV_vertex_program4,
    OES_compressed_paletted_texture,
    OES_fixed_point,
    OES_read_format,
    OES_single_precision,
    SGIS_generate_mipmap,
    SGIS_point_parameters,
    SGIS_texture_border_clamp,
    SGIS_texture_edge_clamp,
    SGIS_texture_lod,
}

impl Extension {
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Exact, case sensitive lookup of an advertised name.
    pub fn from_name(name: &str) -> Option<Extension> {
        Extension::ALL
            .iter()
            .copied()
            .find(|extension| extension.name() == name)
    }
}

impl std::fmt::Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_carry_gl_prefix() {
        assert_eq!(Extension::ARB_multitexture.name(), "GL_ARB_multitexture");
        assert_eq!(Extension::EXT_texture3D.name(), "GL_EXT_texture3D");
        assert_eq!(Extension::ARB_ES2_compatibility.name(), "GL_ARB_ES2_compatibility");
        for extension in Extension::ALL {
            assert!(extension.name().starts_with("GL_"), "{extension}");
        }
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(
            Extension::from_name("GL_ARB_shader_objects"),
            Some(Extension::ARB_shader_objects)
        );
        assert_eq!(Extension::from_name("GL_ARB_shader_objects_foo"), None);
        assert_eq!(Extension::from_name("gl_arb_shader_objects"), None);
        assert_eq!(Extension::from_name("ARB_shader_objects"), None);
    }

    #[test]
    fn test_every_vendor_is_represented() {
        for vendor in [
            "ARB", "EXT", "NV", "AMD", "ATI", "APPLE", "KHR", "OES", "SGIS", "INGR",
        ] {
            let prefix = format!("GL_{vendor}_");
            assert!(
                Extension::ALL.iter().any(|e| e.name().starts_with(&prefix)),
                "no {vendor} extension"
            );
        }
    }
}
